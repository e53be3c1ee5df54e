use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Vertical scroll offset of the window, refreshed on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let source = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(source.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>);
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

/// How far down the page the reader is, as a percentage.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

fn page_heights() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((document_height, viewport_height))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls to the element with the given id. Returns false when the current
/// page has no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let element = window.document().and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let offset = window.scroll_y().unwrap_or(0.0);
            smooth_scroll_to(element.get_bounding_client_rect().top() + offset);
            true
        }
        None => false,
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let scroll_y = use_scroll_y();
    let progress = page_heights()
        .map(|(document, viewport)| scroll_progress(scroll_y, document, viewport))
        .unwrap_or(0.0);

    html! {
        <>
            <style>{r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    height: 3px;
                    z-index: 200;
                    background: linear-gradient(90deg, #14b8a6, #3b82f6);
                    transition: width 0.1s linear;
                }
            "#}</style>
            <div class="scroll-progress" style={format!("width: {:.2}%;", progress)}></div>
        </>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let scroll_y = use_scroll_y();
    if scroll_y <= config::BACK_TO_TOP_AFTER {
        return html! {};
    }

    html! {
        <>
            <style>{r#"
                .back-to-top {
                    position: fixed;
                    bottom: 6rem;
                    right: 1.5rem;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: #0d9488;
                    color: white;
                    font-size: 1.25rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(13, 148, 136, 0.3);
                    z-index: 40;
                }
                .back-to-top:hover {
                    transform: translateY(-2px);
                }
            "#}</style>
            <button class="back-to-top" aria-label="Back to top" onclick={Callback::from(|_| smooth_scroll_to(0.0))}>
                {"↑"}
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_on_short_page() {
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
