use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::animations::{stagger, Easing, Preset, Transition};
use crate::config;

/// (message, progress ceiling in percent)
pub const LOADING_PHASES: &[(&str, f64)] = &[
    ("Initializing HealthSeva...", 20.0),
    ("Connecting to healthcare network...", 40.0),
    ("Loading medical resources...", 60.0),
    ("Securing your health data...", 80.0),
    ("Almost ready for your care...", 100.0),
];

const FADE_OUT_MS: u32 = 1_000;

/// Progress of the splash screen, advanced by random increments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Index into `LOADING_PHASES` for the current progress.
    pub fn phase(&self) -> usize {
        LOADING_PHASES
            .iter()
            .position(|(_, ceiling)| self.percent <= *ceiling)
            .unwrap_or(LOADING_PHASES.len() - 1)
    }

    /// Moves forward by `increment` percent, capped at 100.
    pub fn advance(&mut self, increment: f64) {
        self.percent = (self.percent + increment).min(100.0);
    }
}

/// A random step between 2 and 10 percent.
fn random_increment() -> f64 {
    Math::random() * 8.0 + 2.0
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let progress = use_state(LoadingProgress::default);
    let fading = use_state(|| false);

    {
        let progress = progress.clone();
        let fading = fading.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = LoadingProgress::default();
                let finish_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let interval = {
                    let finish_handle = finish_handle.clone();
                    Interval::new(config::LOADING_TICK_MS, move || {
                        if current.is_complete() {
                            return;
                        }
                        current.advance(random_increment());
                        progress.set(current);
                        if current.is_complete() {
                            fading.set(true);
                            let on_complete = on_complete.clone();
                            *finish_handle.borrow_mut() = Some(Timeout::new(FADE_OUT_MS, move || {
                                on_complete.emit(());
                            }));
                        }
                    })
                };

                move || {
                    drop(interval);
                    finish_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let phase = progress.phase();
    let (message, _) = LOADING_PHASES[phase];

    html! {
        <div class={classes!("loading-screen", (*fading).then_some("fading"))}>
            <style>{r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 10000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #f0fdfa, #ffffff, #eff6ff);
                    transition: opacity 0.8s ease;
                }
                .loading-screen.fading {
                    opacity: 0;
                    pointer-events: none;
                }
                .loading-content {
                    text-align: center;
                    width: min(28rem, 90vw);
                }
                .loading-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(90deg, #009999, #00cccc, #FF6F61);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .loading-tagline {
                    color: #6b7280;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .loading-message {
                    color: #4b5563;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .loading-track {
                    height: 8px;
                    background: #e5e7eb;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .loading-bar {
                    height: 100%;
                    background: linear-gradient(90deg, #009999, #FF6F61);
                    transition: width 0.15s linear;
                }
                .loading-percent {
                    margin-top: 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #009999;
                }
                .loading-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .loading-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    background: #d1d5db;
                }
                .loading-dot.reached {
                    background: #009999;
                }
            "#}</style>
            <div class="loading-content">
                <div class="loading-title" style={Transition::new(Preset::ScaleIn).duration(800).style()}>
                    {"HealthSeva"}
                </div>
                <div class="loading-tagline">{"Healthcare at your doorstep"}</div>
                <div class="loading-message" style={Transition::new(Preset::FadeInUp).duration(300).style()}>
                    {message}
                </div>
                <div class="loading-track">
                    <div class="loading-bar" style={format!("width: {:.0}%;", progress.percent())}></div>
                </div>
                <div class="loading-percent">{format!("{:.0}%", progress.percent())}</div>
                <div class="loading-dots">
                    { for (0..LOADING_PHASES.len()).map(|index| html! {
                        <span
                            class={classes!("loading-dot", (index <= phase).then_some("reached"))}
                            style={Transition::new(Preset::Pulse)
                                .duration(1200)
                                .delay(stagger(index, 200))
                                .easing(Easing::EaseInOut)
                                .style()}
                        ></span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_follow_progress() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.phase(), 0);

        progress.advance(20.0);
        assert_eq!(progress.phase(), 0);

        progress.advance(0.5);
        assert_eq!(progress.phase(), 1);

        progress.advance(45.0);
        assert_eq!(progress.phase(), 3);
    }

    #[test]
    fn test_progress_caps_at_hundred() {
        let mut progress = LoadingProgress::default();
        for _ in 0..30 {
            progress.advance(10.0);
        }
        assert_eq!(progress.percent(), 100.0);
        assert!(progress.is_complete());
        assert_eq!(progress.phase(), LOADING_PHASES.len() - 1);
    }

    #[test]
    fn test_worst_case_finishes_in_fifty_ticks() {
        let mut progress = LoadingProgress::default();
        for _ in 0..49 {
            progress.advance(2.0);
        }
        assert!(!progress.is_complete());
        progress.advance(2.0);
        assert!(progress.is_complete());
    }
}
