// DOM hooks shared by the views, the sink and the frame loop.

// Mount point in web/index.html
pub const ROOT_ID: &str = "app";

// Element ids rendered by the views
pub const HERO_ID: &str = "hero";
pub const AGREE_BUTTON_ID: &str = "agree-btn";
pub const PRINT_BUTTON_ID: &str = "print-btn";
pub const BACK_LINK_ID: &str = "back-home";

// Scroll effect targets
pub const RIBBON_SELECTOR: &str = ".ribbon";
pub const CARD_SELECTOR: &str = ".card";
pub const AGREE_BAR_SELECTOR: &str = ".agree";
pub const IN_VIEW_CLASS: &str = "in-view"; // added once, never removed

// Environment
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const POINTER_MOVE_EVENT: &str = "pointermove";
