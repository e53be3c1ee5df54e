use yew::prelude::*;

use crate::components::footer::Footer;
use crate::sections::{
    benefits::Benefits, contact::Contact, hero::Hero, problems::Problems,
    services::ServicesCarousel,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_book: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let on_book = props.on_book.clone();

    html! {
        <>
            <main class="landing">
                <section id="home">
                    <Hero on_book={on_book.clone()} />
                </section>
                <section id="services">
                    <ServicesCarousel on_book={on_book.clone()} />
                </section>
                <section id="benefits">
                    <Benefits />
                </section>
                <section id="about">
                    <Problems on_book={on_book.clone()} />
                </section>
                <section id="contact">
                    <Contact {on_book} />
                </section>
            </main>
            <Footer />
        </>
    }
}
