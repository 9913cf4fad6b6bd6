// DOM contract and timing for the loader overlay and scroll illustrations.

// Loader overlay element ids
pub const LOADER_ID: &str = "loader";
pub const LOADER_CANVAS_ID: &str = "loaderCanvas";
pub const LOADER_BAR_FILL_ID: &str = "loaderBarFill";
pub const LOADER_PCT_ID: &str = "loaderPct";
pub const LOADER_LOGO_ID: &str = "loaderLogo";
pub const LOADER_TAGLINE_ID: &str = "loaderTagline";
pub const HERO_PLACEHOLDER_ID: &str = "heroPlaceholder";

// Scroll illustrations
pub const ILLUSTRATION_SELECTOR: &str = "canvas[data-blueprint=\"scroll\"]";
pub const TRIGGER_ATTR: &str = "data-blueprint-trigger"; // id of the section that drives the canvas
pub const RANGE_START_ATTR: &str = "data-blueprint-start"; // viewport fraction
pub const RANGE_END_ATTR: &str = "data-blueprint-end";

// Outgoing signals
pub const LOADER_COMPLETE_EVENT: &str = "blueprint:loader-complete";
pub const ILLUSTRATION_COMPLETE_EVENT: &str = "blueprint:illustration-complete";
pub const COMPLETE_CLASS: &str = "blueprint-complete";

// Overlay transitions (CSS, milliseconds)
pub const LOADER_FADE_MS: u32 = 600;
pub const HERO_FADE_MS: u32 = 800;
pub const HERO_DELAY_MS: u32 = 300;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // a hidden tab must not skip the build-up
pub const FIRST_FRAME_DT_SEC: f32 = 1.0 / 60.0;

// Annotation font
pub const LABEL_FONT_FAMILY: &str = "Montserrat, sans-serif";
pub const LABEL_FONT_WEIGHT: u32 = 300;
