use yew::prelude::*;

use crate::animations::{Preset, Transition, HOVER_LIFT_CLASS};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_book: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let on_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };
    let details = [
        ("📞", "Phone", config::CONTACT_PHONE),
        ("✉", "Email", config::CONTACT_EMAIL),
        ("📍", "Address", config::CONTACT_ADDRESS),
        ("🕒", "Hours", "24/7 Emergency Care Available"),
    ];

    html! {
        <div class="contact">
            <style>{r#"
                .contact {
                    padding: 5rem 1.5rem;
                    background: #f9fafb;
                }
                .contact-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 8px;
                    background: #e0f7fa;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .contact-item h3 {
                    margin: 0;
                    color: #243b53;
                    font-size: 1rem;
                }
                .contact-item p {
                    margin: 0.25rem 0 0;
                    color: #486581;
                }
                .contact-cta {
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                }
                .contact-cta button {
                    width: 100%;
                    background: linear-gradient(90deg, #009999, #00cccc);
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="section-heading" style={Transition::new(Preset::FadeInUp).style()}>
                <h2>{"Get in Touch"}</h2>
                <p>{"Ready to take the next step in your healthcare journey? Contact us today."}</p>
            </div>
            <div class="contact-grid">
                <div style={Transition::new(Preset::FadeInLeft).style()}>
                    { for details.iter().map(|(icon, title, value)| html! {
                        <div class="contact-item">
                            <div class="contact-icon">{*icon}</div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*value}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div style={Transition::new(Preset::FadeInRight).style()}>
                    <div class={classes!("contact-cta", HOVER_LIFT_CLASS)}>
                        <h3>{"Book Your Appointment"}</h3>
                        <p>{"Schedule a consultation with our healthcare professionals today."}</p>
                        <button onclick={on_book}>{"Book Appointment Now"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
