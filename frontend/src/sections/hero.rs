use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animations::{stagger, Preset, Transition};
use crate::components::nav::SOCIAL_LINKS;
use crate::config;

const TITLE: &str = "Your Health, Our Priority";
const SUBTITLE: &str = "Experience world-class healthcare with compassionate care, cutting-edge technology, and personalized treatment plans designed just for you.";

const STATS: &[(&str, &str, &str)] = &[
    ("👥", "50,000+", "Happy Patients"),
    ("🏅", "15+", "Years Experience"),
    ("⏱", "24/7", "Emergency Care"),
];

/// Reveals a text one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    pub fn visible(&self) -> &'static str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// Shows one more character. Returns false once everything is visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let typewriter = use_state(|| Typewriter::new(TITLE));

    {
        let typewriter = typewriter.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = Typewriter::new(TITLE);
                let interval = Interval::new(config::TYPEWRITER_TICK_MS, move || {
                    if current.tick() {
                        typewriter.set(current);
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div class="hero">
            <style>{r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 7rem 1.5rem 3rem;
                    background: linear-gradient(135deg, #ecfdf5, #f0fdfa 40%, #eff6ff);
                }
                .hero-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero h1 {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    color: #1f2937;
                    line-height: 1.15;
                    margin: 0 0 1.5rem;
                    min-height: 2.3em;
                }
                .typewriter-caret {
                    display: inline-block;
                    width: 3px;
                    height: 0.9em;
                    margin-left: 4px;
                    vertical-align: middle;
                    background: linear-gradient(#3b82f6, #8b5cf6);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                    font-weight: 300;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                    flex-wrap: wrap;
                }
                .hero-primary {
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: white;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .hero-primary:hover, .hero-secondary:hover {
                    transform: translateY(-2px) scale(1.05);
                }
                .hero-secondary {
                    background: white;
                    color: #374151;
                    border: 1px solid #d1d5db;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e5e7eb;
                    text-align: center;
                }
                .hero-stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1f2937;
                }
                .hero-stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .hero-social {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .hero-social a {
                    color: #0d9488;
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .hero-monitor {
                    position: relative;
                    border: 10px solid #009999;
                    border-radius: 16px;
                    overflow: hidden;
                    background: #0f172a;
                    box-shadow: 0 25px 50px rgba(0, 153, 153, 0.3);
                    aspect-ratio: 16 / 10;
                }
                .hero-monitor video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .hero-actions, .hero-social {
                        justify-content: center;
                    }
                }
            "#}</style>
            <div class="hero-grid">
                <div style={Transition::new(Preset::FadeInLeft).duration(800).style()}>
                    <h1>
                        {typewriter.visible()}
                        <span class="typewriter-caret"></span>
                    </h1>
                    <p class="hero-subtitle">{SUBTITLE}</p>
                    <div class="hero-actions">
                        <button class="hero-primary" onclick={on_book}>
                            {"📅 Book Appointment →"}
                        </button>
                        <a class="hero-secondary" href="#services">{"👁 Learn More"}</a>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().enumerate().map(|(index, (icon, value, label))| html! {
                            <div style={Transition::new(Preset::FadeInUp).delay(stagger(index, 150)).style()}>
                                <div>{*icon}</div>
                                <div class="hero-stat-value">{*value}</div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                    <div class="hero-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                        }) }
                    </div>
                </div>
                <div class="hero-monitor" style={Transition::new(Preset::ScaleIn).duration(1200).delay(500).style()}>
                    <video src="/assets/demo.mp4" autoplay=true muted=true loop=true playsinline=true></video>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typewriter_reveals_one_char_per_tick() {
        let mut typewriter = Typewriter::new("Care");
        assert_eq!(typewriter.visible(), "");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "C");
        assert!(typewriter.tick());
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "Car");
    }

    #[test]
    fn test_typewriter_stops_at_end() {
        let mut typewriter = Typewriter::new("ok");
        while typewriter.tick() {}
        assert!(typewriter.is_done());
        assert_eq!(typewriter.visible(), "ok");
        assert!(!typewriter.tick());
    }

    #[test]
    fn test_typewriter_respects_char_boundaries() {
        let mut typewriter = Typewriter::new("सेवा");
        typewriter.tick();
        assert_eq!(typewriter.visible(), "स");
    }
}
