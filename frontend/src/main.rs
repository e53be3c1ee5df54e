use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animations;
mod config;
mod appointment {
    pub mod model;
    pub mod validation;
    pub mod wizard;
    pub mod submission;
    pub mod session;
    pub mod modal;
}
mod components {
    pub mod nav;
    pub mod scroll;
    pub mod footer;
    pub mod confetti;
    pub mod chat_widget;
    pub mod whatsapp_button;
    pub mod loading_screen;
    pub mod medical_background;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod benefits;
    pub mod problems;
    pub mod contact;
}
mod pages {
    pub mod landing;
    pub mod appointment;
    pub mod termsprivacy;
}

use appointment::modal::AppointmentModal;
use components::{
    chat_widget::ChatWidget,
    loading_screen::LoadingScreen,
    medical_background::MedicalBackground,
    nav::Nav,
    scroll::{BackToTop, ScrollProgress},
    whatsapp_button::WhatsAppButton,
};
use pages::{
    appointment::AppointmentPage,
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/appointment")]
    Appointment,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/terms-and-conditions")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, on_book: Callback<()>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {on_book} /> }
        },
        Route::Appointment => {
            info!("Rendering Appointment page");
            html! { <AppointmentPage {on_book} /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing {on_book} /> }
        },
    }
}

const GLOBAL_STYLES: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    color: #1f2937;
    background: white;
}
main, footer, section {
    position: relative;
    z-index: 1;
}
.chat-launcher {
    position: fixed;
    bottom: 1.5rem;
    left: 1.5rem;
    z-index: 50;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    border: none;
    background: linear-gradient(135deg, #14B8A6, #009999);
    color: white;
    font-size: 1.4rem;
    cursor: pointer;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
}
"#;

#[function_component]
fn App() -> Html {
    let booking_open = use_state(|| false);
    let chat_open = use_state(|| false);
    let loading = use_state(|| true);

    // The splash screen never outstays its welcome.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADING_MAX_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| {
            info!("Booking form requested");
            booking_open.set(true);
        })
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };
    let finish_loading = {
        let loading = loading.clone();
        Callback::from(move |_| loading.set(false))
    };
    let toggle_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(!*chat_open))
    };
    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| chat_open.set(false))
    };
    let render = {
        let open_booking = open_booking.clone();
        Callback::from(move |route: Route| switch(route, open_booking.clone()))
    };

    html! {
        <BrowserRouter>
            <style>{GLOBAL_STYLES}</style>
            <style>{animations::stylesheet()}</style>
            <MedicalBackground />
            if *loading {
                <LoadingScreen on_complete={finish_loading} />
            }
            <ScrollProgress />
            <Nav on_book={open_booking} />
            <Switch<Route> {render} />
            <BackToTop />
            <button class="chat-launcher" aria-label="Chat with support" onclick={toggle_chat}>{"💬"}</button>
            <ChatWidget is_open={*chat_open} on_close={close_chat} />
            <WhatsAppButton />
            <AppointmentModal is_open={*booking_open} on_close={close_booking} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting HealthSeva");
    yew::Renderer::<App>::new().render();
}
