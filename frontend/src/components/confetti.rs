use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Provided by index.html on top of canvas-confetti.
    #[wasm_bindgen(js_namespace = window, js_name = launchConfetti, catch)]
    fn launch_confetti(options: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ConfettiOptions {
    particle_count: u32,
    spread: u32,
    origin: Origin,
    colors: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Origin {
    y: f32,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            origin: Origin { y: 0.6 },
            colors: &["#3B82F6", "#EC4899", "#14B8A6", "#F59E0B"],
        }
    }
}

/// Fires the celebration burst shown after a booking goes through.
pub fn celebrate() {
    let options = match serde_wasm_bindgen::to_value(&ConfettiOptions::default()) {
        Ok(options) => options,
        Err(e) => {
            warn!("Could not encode confetti options: {}", e);
            return;
        }
    };
    if launch_confetti(options).is_err() {
        warn!("Confetti is unavailable on this page");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_canvas_confetti_names() {
        let json = serde_json::to_value(ConfettiOptions::default()).unwrap();
        assert_eq!(json["particleCount"], 100);
        assert_eq!(json["spread"], 70);
        assert_eq!(json["colors"].as_array().map(Vec::len), Some(4));
    }
}
