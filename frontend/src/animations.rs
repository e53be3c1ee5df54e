//! Named transition presets shared by the landing page widgets.
//!
//! Each preset renders to a CSS `animation` shorthand plus the keyframes it
//! refers to, so components only pick a preset and a timing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// The soft overshoot used for section reveals.
    Smooth,
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::Smooth => write!(f, "cubic-bezier(0.22, 1, 0.36, 1)"),
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    FadeInUp,
    FadeInDown,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    ModalEnter,
    ModalExit,
    StepEnter,
    Float,
    Pulse,
}

impl Preset {
    pub const ALL: &'static [Preset] = &[
        Preset::FadeInUp,
        Preset::FadeInDown,
        Preset::FadeInLeft,
        Preset::FadeInRight,
        Preset::ScaleIn,
        Preset::ModalEnter,
        Preset::ModalExit,
        Preset::StepEnter,
        Preset::Float,
        Preset::Pulse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::FadeInUp => "hs-fade-in-up",
            Preset::FadeInDown => "hs-fade-in-down",
            Preset::FadeInLeft => "hs-fade-in-left",
            Preset::FadeInRight => "hs-fade-in-right",
            Preset::ScaleIn => "hs-scale-in",
            Preset::ModalEnter => "hs-modal-enter",
            Preset::ModalExit => "hs-modal-exit",
            Preset::StepEnter => "hs-step-enter",
            Preset::Float => "hs-float",
            Preset::Pulse => "hs-pulse",
        }
    }

    fn frames(self) -> (&'static str, &'static str) {
        match self {
            Preset::FadeInUp => ("opacity: 0; transform: translateY(60px);", "opacity: 1; transform: translateY(0);"),
            Preset::FadeInDown => ("opacity: 0; transform: translateY(-60px);", "opacity: 1; transform: translateY(0);"),
            Preset::FadeInLeft => ("opacity: 0; transform: translateX(-60px);", "opacity: 1; transform: translateX(0);"),
            Preset::FadeInRight => ("opacity: 0; transform: translateX(60px);", "opacity: 1; transform: translateX(0);"),
            Preset::ScaleIn => ("opacity: 0; transform: scale(0.8);", "opacity: 1; transform: scale(1);"),
            Preset::ModalEnter => ("opacity: 0; transform: scale(0.8) translateY(50px);", "opacity: 1; transform: scale(1) translateY(0);"),
            Preset::ModalExit => ("opacity: 1; transform: scale(1) translateY(0);", "opacity: 0; transform: scale(0.8) translateY(50px);"),
            Preset::StepEnter => ("opacity: 0; transform: translateX(20px);", "opacity: 1; transform: translateX(0);"),
            Preset::Float => ("transform: translateY(0);", "transform: translateY(-12px);"),
            Preset::Pulse => ("transform: scale(1); opacity: 0.75;", "transform: scale(1.5); opacity: 0;"),
        }
    }

    /// Looping presets run forever and alternate direction.
    fn looping(self) -> bool {
        matches!(self, Preset::Float | Preset::Pulse)
    }

    pub fn keyframes(self) -> String {
        let (from, to) = self.frames();
        format!("@keyframes {} {{ from {{ {} }} to {{ {} }} }}", self.name(), from, to)
    }
}

/// A preset with its timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub preset: Preset,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            duration_ms: 600,
            delay_ms: 0,
            easing: Easing::Smooth,
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Inline `style` value for the animated element.
    pub fn style(&self) -> String {
        let tail = if self.preset.looping() {
            "infinite alternate"
        } else {
            "both"
        };
        format!(
            "animation: {} {}ms {} {}ms {};",
            self.preset.name(),
            self.duration_ms,
            self.easing,
            self.delay_ms,
            tail
        )
    }
}

/// Delay for the n-th child of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// Cards carrying this class rise slightly while hovered.
pub const HOVER_LIFT_CLASS: &str = "hs-hover-lift";

pub fn hover_lift_rule(distance_px: u32, duration_ms: u32, easing: Easing) -> String {
    format!(
        ".{class} {{ transition: transform {duration_ms}ms {easing}, box-shadow {duration_ms}ms {easing}; }} \
         .{class}:hover {{ transform: translateY(-{distance_px}px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1); }}",
        class = HOVER_LIFT_CLASS,
    )
}

/// Every preset's keyframes plus the hover lift rule, injected once by the
/// app shell.
pub fn stylesheet() -> String {
    let mut rules: Vec<String> = Preset::ALL.iter().map(|preset| preset.keyframes()).collect();
    rules.push(hover_lift_rule(6, 300, Easing::EaseOut));
    rules.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transition_style() {
        let style = Transition::new(Preset::FadeInUp).style();
        assert_eq!(
            style,
            "animation: hs-fade-in-up 600ms cubic-bezier(0.22, 1, 0.36, 1) 0ms both;"
        );
    }

    #[test]
    fn test_looping_and_custom_timing() {
        let style = Transition::new(Preset::Float)
            .duration(4000)
            .delay(stagger(3, 500))
            .easing(Easing::EaseInOut)
            .style();
        assert_eq!(style, "animation: hs-float 4000ms ease-in-out 1500ms infinite alternate;");
    }

    #[test]
    fn test_stylesheet_has_every_preset() {
        let sheet = stylesheet();
        for preset in Preset::ALL {
            assert!(sheet.contains(&format!("@keyframes {} ", preset.name())));
        }
        assert!(sheet.contains(".hs-hover-lift:hover"));
    }

    #[test]
    fn test_hover_lift_rule() {
        let rule = hover_lift_rule(10, 200, Easing::Linear);
        assert!(rule.contains("transition: transform 200ms linear"));
        assert!(rule.contains("translateY(-10px)"));
    }
}
