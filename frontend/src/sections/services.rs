use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animations::{stagger, Preset, Transition};
use crate::config;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🤸",
        title: "Physiotherapy",
        description: "Professional physiotherapy services for rehabilitation and recovery",
        features: ["Movement Therapy", "Pain Management", "Recovery Plans", "Expert Physiotherapists"],
        accent: "#3b82f6",
    },
    Service {
        icon: "❤",
        title: "Nursing Care",
        description: "Compassionate nursing care with qualified healthcare professionals",
        features: ["24/7 Care", "Qualified Nurses", "Medical Assistance", "Home Care"],
        accent: "#22c55e",
    },
    Service {
        icon: "💊",
        title: "Medicine",
        description: "Quality medicines and pharmaceutical care for all your health needs",
        features: ["Prescription Medicine", "Home Delivery", "Quality Assured", "Expert Consultation"],
        accent: "#a855f7",
    },
    Service {
        icon: "🩺",
        title: "Doctor Visits",
        description: "Professional doctor consultations at your home or our clinic",
        features: ["Home Visits", "Expert Doctors", "Comprehensive Checkup", "Follow-up Care"],
        accent: "#ef4444",
    },
];

/// Index of the highlighted slide, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self { index, ..self }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_book: Callback<()>,
}

#[function_component(ServicesCarousel)]
pub fn services_carousel(props: &ServicesProps) -> Html {
    let carousel = use_state(|| Carousel::new(SERVICES.len()));
    let playing = use_state(|| true);

    {
        let carousel = carousel.clone();
        let millis = if *playing { config::CAROUSEL_INTERVAL_MS } else { 0 };
        use_interval(move || carousel.set(carousel.next()), millis);
    }

    let step = |advance: fn(Carousel) -> Carousel| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(advance(*carousel)))
    };
    let toggle_play = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(!*playing))
    };
    let on_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };
    let active = carousel.index();

    html! {
        <div class="services">
            <style>{r#"
                .services {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #ffffff, #eff6ff, #faf5ff);
                }
                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }
                .section-heading h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    margin: 0 0 1.5rem;
                    background: linear-gradient(90deg, #009999, #3b82f6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                .services-grid {
                    max-width: 1280px;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    border: 2px solid transparent;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                    transition: transform 0.4s ease, border-color 0.4s ease, box-shadow 0.4s ease;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                }
                .service-card.active {
                    transform: translateY(-8px) scale(1.03);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12);
                }
                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    margin: 0 0 0.75rem;
                    color: #1f2937;
                }
                .service-card p {
                    color: #4b5563;
                    margin: 0 0 1rem;
                }
                .service-card ul {
                    padding-left: 1.25rem;
                    color: #374151;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .services-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                }
                .services-controls button {
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    border: 1px solid #d1d5db;
                    background: white;
                    cursor: pointer;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    padding: 0;
                }
                .carousel-dot.active {
                    background: #009999;
                    width: 2rem;
                    border-radius: 9999px;
                }
                .services-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                .services-cta button {
                    background: linear-gradient(90deg, #009999, #14b8a6);
                    color: white;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="section-heading" style={Transition::new(Preset::FadeInUp).style()}>
                <h2>{"Our Healthcare Services"}</h2>
                <p>{"Comprehensive medical care designed around your needs, available 24/7 with cutting-edge technology and compassionate professionals."}</p>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| {
                    let border = format!(
                        "border-color: {};",
                        if index == active { service.accent } else { "transparent" },
                    );
                    html! {
                        <div style={Transition::new(Preset::FadeInUp).delay(stagger(index, 100)).style()}>
                            <div class={classes!("service-card", (index == active).then_some("active"))} style={border}>
                                <div class="service-icon" style={format!("color: {};", service.accent)}>{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul>
                                    { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="services-controls">
                <button aria-label="Previous service" onclick={step(Carousel::prev)}>{"‹"}</button>
                { for (0..SERVICES.len()).map(|index| {
                    let carousel = carousel.clone();
                    html! {
                        <button
                            class={classes!("carousel-dot", (index == active).then_some("active"))}
                            aria-label={format!("Go to service {}", index + 1)}
                            onclick={Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(index)))}
                        ></button>
                    }
                }) }
                <button aria-label="Next service" onclick={step(Carousel::next)}>{"›"}</button>
                <button aria-label={if *playing { "Pause" } else { "Play" }} onclick={toggle_play}>
                    { if *playing { "⏸" } else { "▶" } }
                </button>
            </div>
            <div class="services-cta">
                <button onclick={on_book}>{"Book a Home Visit"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let carousel = Carousel::new(4).go_to(3);
        assert_eq!(carousel.next().index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.prev().index(), 3);
        assert_eq!(carousel.prev().prev().index(), 2);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let carousel = Carousel::new(4).go_to(2);
        assert_eq!(carousel.go_to(7).index(), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next().index(), 0);
        assert_eq!(carousel.prev().index(), 0);
    }

    #[test]
    fn test_four_services_listed() {
        assert_eq!(SERVICES.len(), 4);
    }
}
