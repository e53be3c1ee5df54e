use yew::prelude::*;

use crate::components::footer::Footer;

#[derive(Properties, PartialEq)]
pub struct AppointmentPageProps {
    pub on_book: Callback<()>,
}

/// Direct link to the booking form: opens it as soon as the page mounts.
#[function_component(AppointmentPage)]
pub fn appointment_page(props: &AppointmentPageProps) -> Html {
    {
        let on_book = props.on_book.clone();
        use_effect_with_deps(
            move |_| {
                on_book.emit(());
                || ()
            },
            (),
        );
    }

    let reopen = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <>
            <main class="appointment-page">
                <style>{r#"
                    .appointment-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 1.5rem 4rem;
                        background: white;
                    }
                    .appointment-page h1 {
                        font-size: 2rem;
                        background: linear-gradient(135deg, #009999, #00cccc);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .appointment-page p {
                        color: #4b5563;
                        max-width: 36rem;
                    }
                    .appointment-page button {
                        margin-top: 1.5rem;
                        background: linear-gradient(90deg, #009999, #00cccc);
                        color: white;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                "#}</style>
                <h1>{"Book an Appointment"}</h1>
                <p>{"Tell us about the patient and the guardian we should contact, and our team will call you to confirm the visit."}</p>
                <button onclick={reopen}>{"Open Booking Form"}</button>
            </main>
            <Footer />
        </>
    }
}
