use yew::prelude::*;

use crate::animations::{Easing, Preset, Transition};

/// One decorative icon drifting behind the page content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIcon {
    pub glyph: &'static str,
    pub color: &'static str,
    /// Position in percent of the viewport.
    pub x: f32,
    pub y: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl FloatingIcon {
    const fn new(glyph: &'static str, color: &'static str, x: f32, y: f32, delay_ms: u32, duration_ms: u32) -> Self {
        Self { glyph, color, x, y, delay_ms, duration_ms }
    }

    pub fn style(&self) -> String {
        let motion = Transition::new(Preset::Float)
            .duration(self.duration_ms)
            .delay(self.delay_ms)
            .easing(Easing::EaseInOut)
            .style();
        format!("left: {}%; top: {}%; color: {}; {}", self.x, self.y, self.color, motion)
    }
}

pub const FLOATING_ICONS: &[FloatingIcon] = &[
    FloatingIcon::new("♥", "#f87171", 15.0, 25.0, 0, 4_000),
    FloatingIcon::new("∿", "#4ade80", 85.0, 35.0, 500, 3_500),
    FloatingIcon::new("⛨", "#60a5fa", 25.0, 75.0, 1_000, 4_500),
    FloatingIcon::new("⚕", "#c084fc", 75.0, 65.0, 1_500, 3_000),
    FloatingIcon::new("💊", "#f472b6", 65.0, 20.0, 2_000, 3_800),
    FloatingIcon::new("✚", "#2dd4bf", 45.0, 85.0, 2_500, 4_200),
    FloatingIcon::new("⚡", "#facc15", 10.0, 60.0, 3_000, 3_500),
    FloatingIcon::new("👥", "#818cf8", 90.0, 70.0, 3_500, 4_000),
];

#[function_component(MedicalBackground)]
pub fn medical_background() -> Html {
    html! {
        <div class="medical-background" aria-hidden="true">
            <style>{r#"
                .medical-background {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 0;
                }
                .medical-icon {
                    position: absolute;
                    font-size: 2rem;
                    opacity: 0.2;
                }
                .medical-pulse-line {
                    position: absolute;
                    bottom: 5rem;
                    left: 25%;
                    opacity: 0.2;
                }
            "#}</style>
            { for FLOATING_ICONS.iter().map(|icon| html! {
                <span class="medical-icon" style={icon.style()}>{icon.glyph}</span>
            }) }
            <svg
                class="medical-pulse-line"
                width="220"
                height="60"
                viewBox="0 0 220 60"
                fill="none"
                style={Transition::new(Preset::FadeInLeft).duration(2500).easing(Easing::EaseInOut).style()}
            >
                <polyline
                    points="0,30 30,30 40,10 60,50 80,20 100,40 120,10 140,30 160,30 220,30"
                    stroke="#14B8A6"
                    stroke-width="3"
                    fill="none"
                    stroke-linejoin="round"
                />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_stay_on_screen() {
        for icon in FLOATING_ICONS {
            assert!((0.0..=100.0).contains(&icon.x));
            assert!((0.0..=100.0).contains(&icon.y));
        }
    }

    #[test]
    fn test_icon_style_carries_position_and_timing() {
        let style = FLOATING_ICONS[1].style();
        assert!(style.starts_with("left: 85%; top: 35%;"));
        assert!(style.contains("hs-float 3500ms ease-in-out 500ms"));
    }
}
