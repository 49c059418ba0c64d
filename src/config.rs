use std::time::Duration;

use crate::constants::*;
use crate::state::AdvanceMode;

/// Where the carousel finds its elements and how fast it turns.
///
/// The defaults describe the homepage banner: three `img` slides under
/// `#mz-index-banner`, three `span` dots under `#mz-index-lunbo-button`,
/// one tick per second.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub nav_container: String,
    pub banner_container: String,
    pub nav_tag: String,
    pub slide_tag: String,
    pub highlight_class: String,
    pub interval: Duration,
    pub advance: AdvanceMode,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            nav_container: NAV_CONTAINER_ID.to_string(),
            banner_container: BANNER_CONTAINER_ID.to_string(),
            nav_tag: NAV_TAG.to_string(),
            slide_tag: SLIDE_TAG.to_string(),
            highlight_class: HIGHLIGHT_CLASS.to_string(),
            interval: TICK_INTERVAL,
            advance: AdvanceMode::default(),
        }
    }
}

impl CarouselConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_advance(mut self, advance: AdvanceMode) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_nav_container(mut self, id: impl Into<String>) -> Self {
        self.nav_container = id.into();
        self
    }

    pub fn with_banner_container(mut self, id: impl Into<String>) -> Self {
        self.banner_container = id.into();
        self
    }

    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }
}
