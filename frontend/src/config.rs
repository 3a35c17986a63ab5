use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose mechanism logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Testimonial rotation period.
pub const ROTATION_PERIOD_MS: u32 = 5_000;

/// Quiet time after the pointer leaves the navbar before it collapses.
pub const PANEL_CLOSE_DELAY_MS: u32 = 150;

/// Pointer distance from the hero center is divided by this.
pub const PARALLAX_DAMPING: f64 = 30.0;

/// Only the middle 40% of the viewport counts as the activation band.
pub const BAND_ROOT_MARGIN: &str = "-30% 0px -30% 0px";

pub const CLOCK_REFRESH_MS: u32 = 60_000;

/// Testimonial cards visible side by side.
pub const TESTIMONIALS_VISIBLE: usize = 3;
