use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::appointment::session::NAVBAR_ID;
use crate::components::scroll::{scroll_to_section, use_scroll_y};
use crate::config;
use crate::Route;

/// Landing page sections, in page order: (element id, label).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("benefits", "Benefits"),
    ("about", "Why Us"),
    ("contact", "Contact"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/healthsevatyourhome"),
    ("LinkedIn", "https://www.linkedin.com/company/healthsevaatyourhome"),
    ("Instagram", "https://www.instagram.com/healthsevaatyourhome"),
    ("YouTube", "https://www.youtube.com/HealthSevaAtYourHome"),
];

/// First section whose vertical extent straddles the probe line.
///
/// `bounds` yields each section id with its (top, bottom) in viewport
/// coordinates, or `None` when the section isn't on the page.
pub fn active_section<'a>(
    bounds: impl IntoIterator<Item = (&'a str, Option<(f64, f64)>)>,
    probe: f64,
) -> Option<&'a str> {
    bounds.into_iter().find_map(|(id, rect)| {
        let (top, bottom) = rect?;
        (top <= probe && bottom >= probe).then_some(id)
    })
}

fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let navigator = use_navigator();
    let scroll_y = use_scroll_y();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_AFTER;

    let active = active_section(
        NAV_LINKS.iter().map(|(id, _)| (*id, section_bounds(id))),
        config::SCROLL_SPY_PROBE,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                // Legal pages have no sections; go back to the landing page.
                if !scroll_to_section(id) {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Home);
                    }
                }
            })
        }
    };

    let book = {
        let on_book = props.on_book.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav id={NAVBAR_ID} class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>{NAV_STYLES}</style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to("home")}>
                    <img src="/assets/logo.svg" alt="HealthSeva" width="56" height="56" />
                </a>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <a
                            href={format!("#{}", id)}
                            class={classes!("nav-link", (active == Some(*id)).then_some("active"))}
                            onclick={go_to(*id)}
                        >
                            {*label}
                        </a>
                    }) }
                    <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))} class="nav-phone">
                        {config::CONTACT_PHONE}
                    </a>
                    <div class="nav-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                {&name[..1]}
                            </a>
                        }) }
                    </div>
                    <button class="nav-book-button" onclick={book}>
                        {"Book Appointment"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

const NAV_STYLES: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    background: linear-gradient(135deg, #ecfdf5, #f0fdfa, #eff6ff);
    backdrop-filter: blur(20px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
    transition: all 0.5s ease;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.9);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
}
.top-nav.hidden {
    transform: translateY(-100%);
}
.nav-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo img {
    display: block;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    position: relative;
    color: #243b53;
    text-decoration: none;
    font-size: 0.9rem;
    font-weight: 500;
    padding: 0.5rem 0.25rem;
    transition: color 0.2s ease;
}
.nav-link:hover {
    color: #14b8a6;
}
.nav-link.active {
    color: #0d9488;
}
.nav-link.active::after {
    content: '';
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 2px;
    border-radius: 1px;
    background: linear-gradient(90deg, #009999, #E6E6FA, #CC0000);
}
.nav-phone {
    color: #0d9488;
    text-decoration: none;
    font-weight: 500;
}
.nav-social {
    display: flex;
    gap: 0.4rem;
}
.nav-social a {
    width: 1.6rem;
    height: 1.6rem;
    border-radius: 50%;
    background: linear-gradient(90deg, #009999, #FFDAB9);
    color: white;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    text-decoration: none;
}
.nav-book-button {
    background: #0d9488;
    color: white;
    border: none;
    border-radius: 9999px;
    padding: 0.6rem 1.25rem;
    font-weight: 600;
    cursor: pointer;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: transparent;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #243b53;
}
@media (max-width: 1024px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
        position: absolute;
        top: 5rem;
        left: 0;
        right: 0;
        flex-direction: column;
        align-items: stretch;
        gap: 0.5rem;
        padding: 1rem;
        background: rgba(255, 255, 255, 0.95);
        border-top: 1px solid rgba(255, 255, 255, 0.2);
    }
    .nav-right.mobile-menu-open {
        display: flex;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_straddling_probe_is_active() {
        let bounds = vec![
            ("home", Some((-900.0, -100.0))),
            ("services", Some((-100.0, 400.0))),
            ("benefits", Some((400.0, 1200.0))),
        ];
        assert_eq!(active_section(bounds, 100.0), Some("services"));
    }

    #[test]
    fn test_first_match_wins_and_missing_sections_skip() {
        let bounds = vec![
            ("home", None),
            ("services", Some((100.0, 100.0))),
            ("benefits", Some((50.0, 300.0))),
        ];
        assert_eq!(active_section(bounds, 100.0), Some("services"));
    }

    #[test]
    fn test_no_section_under_probe() {
        let bounds = vec![("home", Some((150.0, 900.0))), ("contact", None)];
        assert_eq!(active_section(bounds, 100.0), None);
    }
}
