// DOM contract: selectors and style values for the product-page markup.

pub const GRID_SELECTOR: &str = ".lr-products-grid";
pub const SHELL_SELECTOR: &str = ".lr-shell";
pub const RAIL_SELECTOR: &str = ".lr-scrollbar-track";
pub const THUMB_SELECTOR: &str = ".lr-scrollbar-thumb";
pub const PREV_BUTTON_SELECTOR: &str = ".lr-nav-prev";
pub const NEXT_BUTTON_SELECTOR: &str = ".lr-nav-next";
pub const CARD_SELECTOR: &str = ".lr-product-card";

/// Cursor class applied to the grid while a content drag is active.
pub const GRABBING_CLASS: &str = "lr-grabbing";

/// Fade applied when a card crosses the full-visibility threshold.
pub const CARD_FADE_TRANSITION: &str = "opacity 0.4s ease-out";

// Disabled nav buttons stay in the layout but dimmed and non-interactive.
pub const NAV_ENABLED_OPACITY: &str = "1";
pub const NAV_DISABLED_OPACITY: &str = "0.3";
