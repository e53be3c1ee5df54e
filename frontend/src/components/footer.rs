use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::SOCIAL_LINKS;
use crate::config;
use crate::Route;

const SERVICE_LINKS: &[(&str, &str)] = &[
    ("Doctor Consultation", "#services"),
    ("Physiotherapy", "#services"),
    ("In-Home Nursing Care", "#services"),
    ("ECG at Home", "#services"),
];

const COMPANY_LINKS: &[(&str, &str)] = &[
    ("About Us", "#about"),
    ("Benefits", "#benefits"),
    ("Contact Us", "#contact"),
];

pub fn copyright_line(year: i32) -> String {
    format!(
        "Copyright © {} Health Seva At Your Home Brand by DNP Healthseva Private Limited. All rights reserved.",
        year
    )
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{r#"
                .site-footer {
                    background: linear-gradient(135deg, #009999, #0f766e);
                    color: white;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .footer-brand p {
                    color: #ccfbf1;
                    line-height: 1.6;
                }
                .footer-column h4 {
                    margin: 0 0 1rem;
                    font-size: 1rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-column li {
                    margin-bottom: 0.6rem;
                }
                .site-footer a {
                    color: white;
                    text-decoration: none;
                    opacity: 0.9;
                }
                .site-footer a:hover {
                    opacity: 1;
                    text-decoration: underline;
                }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
            "#}</style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Health Seva At Your Home"}</h3>
                    <p>{"Doctor consultations, physiotherapy, nursing care and ECG, delivered to your doorstep in Patna."}</p>
                    <p>
                        <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{config::CONTACT_PHONE}</a>
                        <br />
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        <br />
                        {config::CONTACT_ADDRESS}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICE_LINKS.iter().map(|(name, href)| html! {
                            <li><a href={*href}>{*name}</a></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        { for COMPANY_LINKS.iter().map(|(name, href)| html! {
                            <li><a href={*href}>{*name}</a></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Terms}>{"Terms and Conditions"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{copyright_line(year)}</span>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_given_year() {
        let line = copyright_line(2031);
        assert!(line.starts_with("Copyright © 2031 Health Seva"));
    }
}
