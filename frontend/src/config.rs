use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    // Development URL when running locally
    option_env!("HEALTHSEVA_BACKEND_URL").unwrap_or("http://localhost:3001")
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("HEALTHSEVA_BACKEND_URL").unwrap_or("") // Same origin in production
}

pub fn appointments_endpoint() -> String {
    format!("{}/api/appointments", get_backend_url())
}

pub fn whatsapp_number() -> &'static str {
    option_env!("HEALTHSEVA_WHATSAPP_NUMBER").unwrap_or("+91 85218 35910")
}

pub const WHATSAPP_GREETING: &str = "Hi! I'd like to book an appointment with HealthSeva.";
pub const CONTACT_EMAIL: &str = "info@healthseva.com";
pub const CONTACT_PHONE: &str = "+91 85218 35910";
pub const CONTACT_ADDRESS: &str = "G-31, PC Colony, Kankarbagh, Patna, Bihar, 800020";

pub const SUBMISSION_TIMEOUT: Duration = Duration::from_secs(20);
pub const SUCCESS_AUTO_CLOSE_MS: u32 = 4_000;

pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;
pub const LOADING_TICK_MS: u32 = 150;
pub const LOADING_MAX_MS: u32 = 3_000;
pub const TYPEWRITER_TICK_MS: u32 = 80;

// Scroll thresholds, in CSS pixels.
pub const NAV_SCROLLED_AFTER: f64 = 20.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const SCROLL_SPY_PROBE: f64 = 100.0;
