// DOM hooks and presentation constants used by the web frontend.

// Element ids and selectors expected in the host page
pub const WRAP_ID: &str = "wrap"; // sphere container; labels are positioned inside it
pub const TOOLTIP_ID: &str = "tooltip";
pub const CONTROLS_SELECTOR: &str = ".controls";
pub const PAUSE_BUTTON_ID: &str = "pauseBtn";
pub const SPEED_UP_BUTTON_ID: &str = "speedUpBtn";
pub const SLOW_DOWN_BUTTON_ID: &str = "slowDownBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const PALETTE_SELECTOR_ID: &str = "colorSchemeSelector";
pub const TAG_CLASS: &str = "tag";

// Data source
pub const DEFAULT_DATA_URL: &str = "./wordcloud_data.json";
pub const DATA_SRC_ATTRIBUTE: &str = "data-src";

// `data-*` attributes on the container that override the sphere config
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "radius",
    "focal-length",
    "damping",
    "max-speed",
    "auto-rotation-speed",
    "jitter",
    "min-font-size",
    "max-font-size",
    "palette",
];

// Controls
pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";
pub const BUTTON_BACKGROUND: &str = "rgba(255,255,255,0.2)";
pub const BUTTON_BACKGROUND_HOVER: &str = "rgba(255,255,255,0.3)";

// Tooltip placement relative to the pointer, in CSS pixels
pub const TOOLTIP_OFFSET_PX: i32 = 10;
