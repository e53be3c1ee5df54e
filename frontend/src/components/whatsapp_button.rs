use log::warn;
use yew::prelude::*;

use crate::animations::{Easing, Preset, Transition};
use crate::config;

/// `wa.me` link for `phone` with a prefilled message. Everything but the
/// digits is stripped from the number.
pub fn deep_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    #[prop_or_else(|| config::whatsapp_number().to_string())]
    pub phone_number: String,
    #[prop_or_else(|| config::WHATSAPP_GREETING.to_string())]
    pub message: String,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let show_tooltip = use_state(|| false);

    let onclick = {
        let url = deep_link(&props.phone_number, &props.message);
        Callback::from(move |_| {
            let opened = web_sys::window()
                .map(|w| w.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer"));
            if !matches!(opened, Some(Ok(_))) {
                warn!("Could not open WhatsApp link");
            }
        })
    };
    let tooltip = |visible: bool| {
        let show_tooltip = show_tooltip.clone();
        move || show_tooltip.set(visible)
    };
    let onmouseenter = {
        let show = tooltip(true);
        Callback::from(move |_: MouseEvent| show())
    };
    let onmouseleave = {
        let hide = tooltip(false);
        Callback::from(move |_: MouseEvent| hide())
    };
    let onfocus = {
        let show = tooltip(true);
        Callback::from(move |_: FocusEvent| show())
    };
    let onblur = {
        let hide = tooltip(false);
        Callback::from(move |_: FocusEvent| hide())
    };

    html! {
        <div class="whatsapp-container">
            <style>{r#"
                .whatsapp-container {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                }
                .whatsapp-tooltip {
                    position: absolute;
                    bottom: 100%;
                    right: 0;
                    margin-bottom: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    background: white;
                    color: #1f2937;
                    font-size: 0.875rem;
                    border-radius: 8px;
                    white-space: nowrap;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .whatsapp-button {
                    position: relative;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: none;
                    background: #22c55e;
                    color: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                }
                .whatsapp-button:hover {
                    background: #16a34a;
                }
                .whatsapp-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: #4ade80;
                    pointer-events: none;
                }
                .whatsapp-badge {
                    position: absolute;
                    top: -0.25rem;
                    right: -0.25rem;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    background: #ef4444;
                    color: white;
                    font-size: 0.7rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
            "#}</style>
            if *show_tooltip {
                <div class="whatsapp-tooltip" style={Transition::new(Preset::ScaleIn).duration(200).style()}>
                    {"Chat with us on WhatsApp"}
                </div>
            }
            <button
                class="whatsapp-button"
                aria-label="Chat on WhatsApp"
                style={Transition::new(Preset::Float).duration(1000).easing(Easing::EaseInOut).style()}
                {onclick}
                {onmouseenter}
                {onmouseleave}
                {onfocus}
                {onblur}
            >
                <span
                    class="whatsapp-pulse"
                    style={Transition::new(Preset::Pulse).duration(2000).easing(Easing::EaseOut).style()}
                ></span>
                {"💬"}
                <span class="whatsapp-badge">{"1"}</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_keeps_only_digits() {
        assert_eq!(
            deep_link("+91 85218 35910", "Hi"),
            "https://wa.me/918521835910?text=Hi"
        );
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let link = deep_link("918521835910", "Hi! I'd like to book an appointment & more.");
        assert_eq!(
            link,
            "https://wa.me/918521835910?text=Hi%21%20I%27d%20like%20to%20book%20an%20appointment%20%26%20more."
        );
    }

    #[test]
    fn test_default_props_use_configured_number() {
        let link = deep_link(config::whatsapp_number(), config::WHATSAPP_GREETING);
        assert!(link.starts_with("https://wa.me/"));
        assert!(!link.contains(' '));
    }
}
