use log::Level;

use crate::observer::ObserverOptions;

/// Opacity applied to the sibling links and the logo while a nav link is hovered.
pub const NAV_FADE_OPACITY: f64 = 0.5;
pub const NAV_REST_OPACITY: f64 = 1.0;

/// Where the hero "Learn more" button scrolls to.
pub const FIRST_SECTION: &str = "#section--1";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose slider and observer traces while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// The header counts as "left" once it is fully hidden behind the nav bar.
pub fn sticky_header_options(nav_height: f64) -> ObserverOptions {
    ObserverOptions::new(0.0, format!("-{}px", nav_height.round() as i64))
}

/// The nav only sticks once the header has been reported out of view.
pub fn nav_is_sticky(header_visible: Option<bool>) -> bool {
    header_visible == Some(false)
}

pub fn section_reveal_options() -> ObserverOptions {
    ObserverOptions::new(0.15, "0px")
}

// Start fetching before the image actually scrolls into view.
pub fn lazy_image_options() -> ObserverOptions {
    ObserverOptions::new(0.0, "200px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_margin_is_negative_nav_height() {
        assert_eq!(sticky_header_options(90.0).root_margin, "-90px");
        assert_eq!(sticky_header_options(89.6).root_margin, "-90px");
        assert_eq!(sticky_header_options(90.0).threshold, 0.0);
    }

    #[test]
    fn nav_sticks_only_after_header_leaves() {
        assert!(!nav_is_sticky(None));
        assert!(!nav_is_sticky(Some(true)));
        assert!(nav_is_sticky(Some(false)));
    }

    #[test]
    fn reveal_and_lazy_thresholds() {
        assert_eq!(section_reveal_options().threshold, 0.15);
        assert_eq!(lazy_image_options().root_margin, "200px");
    }
}
