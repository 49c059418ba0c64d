//! The host side of the banner: one document, one clock, one carousel.
//!
//! `Page` is the event loop. Pointer events and timer ticks reach the
//! carousel only through it, one at a time.

use std::time::Duration;

use tracing::trace;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::constants::OPACITY_HIDDEN;
use crate::dom::{Document, Dom, NodeId};
use crate::timers::Timers;

#[derive(Debug)]
pub struct Page {
    dom: Dom,
    timers: Timers,
    config: CarouselConfig,
    carousel: Option<Carousel>,
}

impl Page {
    pub fn new(dom: Dom, config: CarouselConfig) -> Self {
        Self {
            dom,
            timers: Timers::new(),
            config,
            carousel: None,
        }
    }

    /// Builds the banner markup: one `img` per source under the banner
    /// container, one `span` per source under the nav container.
    pub fn banner<S: AsRef<str>>(sources: &[S], config: CarouselConfig) -> Self {
        let mut dom = Dom::new();
        let root = dom.root();

        let banner = dom.create_element(root, "div", &[("id", config.banner_container.as_str())]);
        for source in sources {
            let src: &str = source.as_ref();
            let img = dom.create_element(banner, &config.slide_tag, &[("src", src)]);
            dom.style_set(img, "opacity", OPACITY_HIDDEN);
        }

        let nav = dom.create_element(root, "div", &[("id", config.nav_container.as_str())]);
        for _ in sources {
            dom.create_element(nav, &config.nav_tag, &[]);
        }

        Self::new(dom, config)
    }

    /// Starts the carousel. Does nothing when the page lacks its containers
    /// or when it is already running.
    pub fn init(&mut self) {
        if self.carousel.is_some() {
            return;
        }
        self.carousel = Carousel::init(&self.dom, &mut self.timers, self.config.clone());
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Advances virtual time, running every tick that falls due on the way.
    /// Returns how many ticks reached the carousel.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.timers.advance(dt);
        let mut ticks = 0;
        while let Some(id) = self.timers.next_due() {
            match self.carousel.as_mut() {
                Some(carousel) if carousel.timer() == Some(id) => {
                    carousel.tick(&mut self.dom);
                    ticks += 1;
                }
                _ => trace!(?id, "tick for a timer nobody owns"),
            }
        }
        ticks
    }

    pub fn pointer_enter(&mut self, target: NodeId) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.pointer_enter(&mut self.dom, &mut self.timers, target),
            None => false,
        }
    }

    pub fn pointer_leave(&mut self, target: NodeId) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.pointer_leave(&self.dom, &mut self.timers, target),
            None => false,
        }
    }

    /// Tears the carousel down; its interval never fires again.
    pub fn unload(&mut self) {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.shutdown(&mut self.timers);
        }
    }

    /// Nav elements in document order (all of them, not just the paired ones).
    pub fn nav_elements(&self) -> Vec<NodeId> {
        self.dom
            .by_id(&self.config.nav_container)
            .map(|nav| self.dom.children_with_tag(nav, &self.config.nav_tag))
            .unwrap_or_default()
    }

    /// Slide elements in document order.
    pub fn slide_elements(&self) -> Vec<NodeId> {
        self.dom
            .by_id(&self.config.banner_container)
            .map(|banner| self.dom.children_with_tag(banner, &self.config.slide_tag))
            .unwrap_or_default()
    }

    /// Positions of nav elements carrying the highlight class.
    pub fn highlighted(&self) -> Vec<usize> {
        self.nav_elements()
            .into_iter()
            .enumerate()
            .filter(|(_, nav)| self.dom.class_contains(*nav, &self.config.highlight_class))
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions of slides whose opacity is 1.
    ///
    /// Follows [`opacity`](Self::opacity): a slide with no inline opacity
    /// counts as opaque, so on a document whose `img`s carry no style every
    /// slide is reported until the first draw. [`Page::banner`] avoids this by
    /// starting each slide at opacity 0.
    pub fn opaque(&self) -> Vec<usize> {
        self.slide_elements()
            .into_iter()
            .enumerate()
            .filter(|(_, slide)| self.opacity(*slide) >= 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Inline opacity of an element as a number; unset or unparsable counts as opaque,
    /// like a browser falling back to the default.
    pub fn opacity(&self, node_id: NodeId) -> f32 {
        self.dom
            .style_get(node_id, "opacity")
            .parse::<f32>()
            .map(|value| value.clamp(0.0, 1.0))
            .unwrap_or(1.0)
    }
}

/// Starts the banner carousel on a page. The one entry point a hosting page calls.
pub fn init(page: &mut Page) {
    page.init();
}
