use std::collections::BTreeSet;
use yew::prelude::*;

use crate::animations::{stagger, Preset, Transition, HOVER_LIFT_CLASS};
use crate::sections::benefits::toggled;

pub struct Problem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub solution: &'static str,
    pub severity: &'static str,
}

pub const PROBLEMS: &[Problem] = &[
    Problem {
        icon: "⏳",
        title: "Long Wait Times",
        description: "Patients often wait hours for appointments and emergency care",
        solution: "Our smart scheduling system and 24/7 availability ensure immediate care when you need it most",
        severity: "high",
    },
    Problem {
        icon: "💸",
        title: "Expensive Healthcare",
        description: "Medical bills can be overwhelming and unpredictable",
        solution: "Transparent pricing, flexible payment plans, and insurance partnerships make quality care affordable",
        severity: "high",
    },
    Problem {
        icon: "📍",
        title: "Limited Access",
        description: "Geographic barriers prevent access to quality healthcare",
        solution: "Telemedicine, home visits, and multiple locations bring healthcare directly to you",
        severity: "medium",
    },
    Problem {
        icon: "💬",
        title: "Poor Communication",
        description: "Unclear medical information and lack of patient engagement",
        solution: "Digital health records, clear communication protocols, and 24/7 support keep you informed",
        severity: "medium",
    },
];

/// A solution shows while its card is hovered, or after it was clicked open.
pub fn solution_visible(index: usize, hovered: Option<usize>, pinned: &BTreeSet<usize>) -> bool {
    hovered == Some(index) || pinned.contains(&index)
}

#[derive(Properties, PartialEq)]
pub struct ProblemsProps {
    pub on_book: Callback<()>,
}

#[function_component(Problems)]
pub fn problems(props: &ProblemsProps) -> Html {
    let hovered = use_state(|| None::<usize>);
    let pinned = use_state(BTreeSet::<usize>::new);

    let on_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div class="problems">
            <style>{r#"
                .problems {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #f8fafc, #f0fdfa);
                }
                .problems-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .problem-card {
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                    cursor: pointer;
                }
                .problem-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .problem-icon {
                    font-size: 2rem;
                }
                .problem-severity {
                    font-size: 0.7rem;
                    font-weight: 600;
                    padding: 0.2rem 0.6rem;
                    border-radius: 9999px;
                    background: #fee2e2;
                    color: #b91c1c;
                }
                .problem-severity.medium {
                    background: #fef3c7;
                    color: #b45309;
                }
                .problem-toggle {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 1rem;
                    color: #0d9488;
                    font-weight: 500;
                    font-size: 0.875rem;
                }
                .problem-solution {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease-in-out, opacity 0.4s ease-in-out;
                    color: #374151;
                }
                .problem-solution.visible {
                    max-height: 12rem;
                    opacity: 1;
                    margin-top: 0.75rem;
                }
                .problems-cta {
                    max-width: 48rem;
                    margin: 5rem auto 0;
                    text-align: center;
                    background: white;
                    border-radius: 24px;
                    padding: 3rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .problems-cta button {
                    background: linear-gradient(90deg, #009999, #00cccc);
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 2rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .problems-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="section-heading" style={Transition::new(Preset::FadeInUp).style()}>
                <h2>{"Healthcare Challenges We Solve"}</h2>
                <p>{"Addressing the pain points that matter most to patients"}</p>
            </div>
            <div class="problems-grid">
                { for PROBLEMS.iter().enumerate().map(|(index, problem)| {
                    let visible = solution_visible(index, *hovered, &pinned);
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    let onclick = {
                        let pinned = pinned.clone();
                        Callback::from(move |_: MouseEvent| pinned.set(toggled(&pinned, index)))
                    };
                    html! {
                        <div style={Transition::new(Preset::FadeInUp).delay(stagger(index, 150)).style()}>
                        <div
                            class={classes!("problem-card", HOVER_LIFT_CLASS)}
                            {onmouseenter}
                            {onmouseleave}
                            {onclick}
                        >
                            <div class="problem-header">
                                <span class="problem-icon">{problem.icon}</span>
                                <div>
                                    <h3>{problem.title}</h3>
                                    <span class={classes!("problem-severity", problem.severity)}>
                                        {format!("{} PRIORITY", problem.severity.to_uppercase())}
                                    </span>
                                </div>
                            </div>
                            <p>{problem.description}</p>
                            <div class="problem-toggle">{"How HealthSeva Solves This →"}</div>
                            <div class={classes!("problem-solution", visible.then_some("visible"))}>
                                {problem.solution}
                            </div>
                        </div>
                        </div>
                    }
                }) }
            </div>
            <div class="problems-cta" style={Transition::new(Preset::FadeInUp).delay(300).style()}>
                <h3>{"Ready for better health care?"}</h3>
                <p>{"Don't let these problems affect your health and well-being. Experience the HealthSeva difference today."}</p>
                <button onclick={on_book}>{"⚡ Book Appointment Now"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_shows_on_hover() {
        let pinned = BTreeSet::new();
        assert!(solution_visible(1, Some(1), &pinned));
        assert!(!solution_visible(0, Some(1), &pinned));
        assert!(!solution_visible(0, None, &pinned));
    }

    #[test]
    fn test_pinned_solution_stays_open() {
        let pinned = toggled(&BTreeSet::new(), 3);
        assert!(solution_visible(3, None, &pinned));
        assert!(solution_visible(3, Some(0), &pinned));
    }
}
