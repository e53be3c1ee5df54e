use std::collections::BTreeSet;
use yew::prelude::*;

use crate::animations::{stagger, Preset, Transition};

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub stat: (&'static str, &'static str),
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "🩺",
        title: "Expert Doctors",
        summary: "Certified medical professionals with years of experience",
        details: "Our team consists of board-certified doctors with specialized training in their respective fields. Each physician undergoes rigorous screening and continuous education to ensure the highest standards of medical care.",
        stat: ("500+", "Certified Doctors"),
    },
    Benefit {
        icon: "⏱",
        title: "24/7 Support",
        summary: "Round-the-clock medical assistance whenever you need it",
        details: "Healthcare emergencies don't follow a schedule, and neither do we. Our 24/7 support system includes emergency hotlines, chat support, and on-call medical professionals.",
        stat: ("24/7", "Availability"),
    },
    Benefit {
        icon: "🖥",
        title: "Advanced Technology",
        summary: "Cutting-edge medical equipment and digital solutions",
        details: "We invest in the latest medical technology to provide accurate diagnoses and effective treatments, so every visit is precise.",
        stat: ("95%", "Accuracy Rate"),
    },
    Benefit {
        icon: "₹",
        title: "Affordable Plans",
        summary: "Quality healthcare that doesn't break the bank",
        details: "We believe healthcare should be accessible to everyone. Our flexible payment plans and insurance partnerships make quality medical care affordable.",
        stat: ("40%", "Cost Savings"),
    },
];

/// `set` with `index` flipped in or out.
pub fn toggled(set: &BTreeSet<usize>, index: usize) -> BTreeSet<usize> {
    let mut next = set.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let flipped = use_state(BTreeSet::<usize>::new);

    html! {
        <div class="benefits">
            <style>{r#"
                .benefits {
                    padding: 5rem 1.5rem;
                    background: white;
                }
                .benefits-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .flip-card {
                    perspective: 1000px;
                    height: 22rem;
                    cursor: pointer;
                }
                .flip-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.7s cubic-bezier(0.22, 1, 0.36, 1);
                    transform-style: preserve-3d;
                }
                .flip-card.flipped .flip-inner {
                    transform: rotateY(180deg);
                }
                .flip-face {
                    position: absolute;
                    inset: 0;
                    backface-visibility: hidden;
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .flip-front {
                    background: linear-gradient(135deg, #f0fdfa, #eff6ff);
                    align-items: center;
                    text-align: center;
                    justify-content: center;
                }
                .flip-back {
                    background: linear-gradient(135deg, #009999, #14b8a6);
                    color: white;
                    transform: rotateY(180deg);
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                .benefit-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .benefit-stat {
                    margin-top: auto;
                    text-align: center;
                }
                .benefit-stat strong {
                    display: block;
                    font-size: 1.75rem;
                }
                .flip-hint {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    color: #0d9488;
                }
                @media (max-width: 1024px) {
                    .benefits-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .benefits-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="section-heading" style={Transition::new(Preset::FadeInUp).style()}>
                <h2>{"Why Choose HealthSeva"}</h2>
                <p>{"Experience healthcare excellence with benefits designed around your needs"}</p>
            </div>
            <div class="benefits-grid">
                { for BENEFITS.iter().enumerate().map(|(index, benefit)| {
                    let is_flipped = flipped.contains(&index);
                    let onclick = {
                        let flipped = flipped.clone();
                        Callback::from(move |_: MouseEvent| flipped.set(toggled(&flipped, index)))
                    };
                    html! {
                        <div
                            class={classes!("flip-card", is_flipped.then_some("flipped"))}
                            style={Transition::new(Preset::FadeInUp).delay(stagger(index, 100)).style()}
                            {onclick}
                        >
                            <div class="flip-inner">
                                <div class="flip-face flip-front">
                                    <div class="benefit-icon">{benefit.icon}</div>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.summary}</p>
                                    <span class="flip-hint">{"Tap to learn more"}</span>
                                </div>
                                <div class="flip-face flip-back">
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.details}</p>
                                    <div class="benefit-stat">
                                        <strong>{benefit.stat.0}</strong>
                                        <span>{benefit.stat.1}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_one_card() {
        let set = toggled(&BTreeSet::new(), 2);
        assert!(set.contains(&2));
        assert_eq!(set.len(), 1);

        let set = toggled(&set, 0);
        let set = toggled(&set, 2);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0]);
    }
}
