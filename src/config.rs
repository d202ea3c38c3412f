use log::Level;

/// Distance inside the viewport edge a block must cross before it reveals.
pub const REVEAL_MARGIN_PX: u32 = 100;
/// Vertical offset a hidden block starts from.
pub const REVEAL_OFFSET_PX: u32 = 50;
pub const REVEAL_DURATION_SECS: f64 = 0.6;

/// How long the contact form shows its thank-you message before resetting.
pub const ACKNOWLEDGEMENT_MS: u32 = 3_000;

/// Scroll distance after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD_PX: i32 = 40;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Root margin handed to the browser's intersection observer.
pub fn reveal_root_margin() -> String {
    format!("-{}px", REVEAL_MARGIN_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_root_margin_shrinks_viewport() {
        assert_eq!(reveal_root_margin(), "-100px");
    }
}
