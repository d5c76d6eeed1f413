use log::Level;

/// Fraction of an element that has to be inside the viewport before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.16;

/// Class carried by every element that takes part in the reveal animation.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

pub const ASSET_BASE: &str = "/assets";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name)
}
