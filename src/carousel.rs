use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::constants::{OPACITY_HIDDEN, OPACITY_VISIBLE};
use crate::dom::{Document, NodeId};
use crate::error::CarouselError;
use crate::state::{AdvanceMode, CarouselState};
use crate::timers::{Scheduler, TimerId};

/// The banner controller.
///
/// Holds the current slide index (`key`) and the one auto-advance interval
/// it may own. Nav element `i` pairs with slide `i` by position only.
///
/// The controller does not own the document or the scheduler; the page hands
/// them in on every call, so every mutation happens from the single loop
/// that owns all three.
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    nav_container: NodeId,
    nav: Vec<NodeId>,
    slides: Vec<NodeId>,
    key: usize,
    timer: Option<TimerId>,
    state: CarouselState,
}

impl Carousel {
    /// Wires the carousel to the document and starts auto-advance.
    ///
    /// A missing container leaves the page untouched and returns `None`.
    /// Mismatched nav/slide counts are trimmed to the shorter list.
    /// Nothing is drawn until the first tick.
    pub fn init<D, S>(doc: &D, timers: &mut S, config: CarouselConfig) -> Option<Self>
    where
        D: Document,
        S: Scheduler,
    {
        let (nav_container, nav, slides) = match resolve(doc, &config) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(label = err.as_label(), "{err}");
                return None;
            }
        };

        let timer = timers.set_interval(config.interval);
        info!(
            slides = slides.len(),
            interval_ms = config.interval.as_millis() as u64,
            mode = ?config.advance,
            "carousel started"
        );

        Some(Self {
            config,
            nav_container,
            nav,
            slides,
            key: 0,
            timer: Some(timer),
            state: CarouselState::AutoAdvancing,
        })
    }

    pub fn key(&self) -> usize {
        self.key
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn nav(&self) -> &[NodeId] {
        &self.nav
    }

    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether a pointer event on `target` is one the carousel listens to:
    /// an element with the nav tag inside the nav container.
    pub fn handles<D: Document>(&self, doc: &D, target: NodeId) -> bool {
        doc.tag_name(target)
            .map(|tag| tag.eq_ignore_ascii_case(&self.config.nav_tag))
            .unwrap_or(false)
            && doc.is_descendant_of(target, self.nav_container)
    }

    /// Highlights nav element `key` and makes slide `key` the only opaque one.
    /// An out-of-range key clears everything and marks nothing.
    pub fn draw<D: Document>(&self, doc: &mut D) {
        let highlight = self.config.highlight_class.as_str();
        for nav in &self.nav {
            doc.class_remove(*nav, highlight);
        }
        if let Some(nav) = self.nav.get(self.key) {
            doc.class_add(*nav, highlight);
        }

        for slide in &self.slides {
            doc.style_set(*slide, "opacity", OPACITY_HIDDEN);
        }
        if let Some(slide) = self.slides.get(self.key) {
            doc.style_set(*slide, "opacity", OPACITY_VISIBLE);
        }
        debug!(key = self.key, "draw");
    }

    /// One auto-advance step: wrap, draw, then move the key on.
    pub fn tick<D: Document>(&mut self, doc: &mut D) {
        let wrap = match self.config.advance {
            AdvanceMode::Legacy => self.key >= self.slides.len().saturating_sub(1),
            AdvanceMode::FullCycle => self.key >= self.slides.len(),
        };
        if wrap {
            self.key = 0;
        }
        self.draw(doc);
        self.key += 1;
    }

    /// Pointer entered a nav element: stop auto-advance and show its slide.
    /// Returns `false` when the target is not a nav element.
    pub fn pointer_enter<D, S>(&mut self, doc: &mut D, timers: &mut S, target: NodeId) -> bool
    where
        D: Document,
        S: Scheduler,
    {
        if !self.handles(&*doc, target) {
            return false;
        }
        let Some(index) = doc.index_among_siblings(target) else {
            return false;
        };

        self.cancel(timers);
        self.key = index;
        self.state = CarouselState::Paused { at: index };
        self.draw(doc);
        true
    }

    /// Pointer left a nav element: resume auto-advance from the current key.
    pub fn pointer_leave<D, S>(&mut self, doc: &D, timers: &mut S, target: NodeId) -> bool
    where
        D: Document,
        S: Scheduler,
    {
        if !self.handles(doc, target) {
            return false;
        }

        // A leave without a matching enter must not leave two intervals running.
        self.cancel(timers);
        let timer = timers.set_interval(self.config.interval);
        self.timer = Some(timer);
        self.state = CarouselState::AutoAdvancing;
        debug!(key = self.key, "auto-advance resumed");
        true
    }

    /// Stops auto-advance for good, e.g. when the page goes away.
    pub fn shutdown<S: Scheduler>(&mut self, timers: &mut S) {
        self.cancel(timers);
    }

    fn cancel<S: Scheduler>(&mut self, timers: &mut S) {
        if let Some(timer) = self.timer.take() {
            timers.clear_interval(timer);
            debug!(key = self.key, "auto-advance paused");
        }
    }
}

type Resolved = (NodeId, Vec<NodeId>, Vec<NodeId>);

fn resolve<D: Document>(doc: &D, config: &CarouselConfig) -> Result<Resolved, CarouselError> {
    let nav_container =
        doc.by_id(&config.nav_container)
            .ok_or_else(|| CarouselError::MissingContainer {
                id: config.nav_container.clone(),
            })?;
    let banner_container =
        doc.by_id(&config.banner_container)
            .ok_or_else(|| CarouselError::MissingContainer {
                id: config.banner_container.clone(),
            })?;

    let mut nav = doc.children_with_tag(nav_container, &config.nav_tag);
    let mut slides = doc.children_with_tag(banner_container, &config.slide_tag);
    if nav.len() != slides.len() {
        let err = CarouselError::CountMismatch {
            nav: nav.len(),
            slides: slides.len(),
        };
        warn!(label = err.as_label(), "{err}");
        let len = nav.len().min(slides.len());
        nav.truncate(len);
        slides.truncate(len);
    }

    Ok((nav_container, nav, slides))
}
