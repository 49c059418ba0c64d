use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Width of the banner window
pub const RENDER_HEIGHT: i32 = 480;           // Height of the banner window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds), used by headless runs

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000); // Auto-advance period

pub const NAV_CONTAINER_ID: &str = "mz-index-lunbo-button";  // Row of indicator spans
pub const BANNER_CONTAINER_ID: &str = "mz-index-banner";     // Stack of slide images
pub const NAV_TAG: &str = "span";
pub const SLIDE_TAG: &str = "img";
pub const HIGHLIGHT_CLASS: &str = "mz-index-lunbo-action";

pub const OPACITY_VISIBLE: &str = "1";
pub const OPACITY_HIDDEN: &str = "0";

pub const DOT_SIZE: f32 = 18.0;               // Side of a nav indicator (pixels)
pub const DOT_GAP: f32 = 14.0;                // Space between indicators (pixels)
pub const DOT_MARGIN_BOTTOM: f32 = 28.0;      // Distance from the window bottom (pixels)
