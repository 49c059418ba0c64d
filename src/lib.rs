//! Rotating homepage banner.
//!
//! A [`Carousel`] cycles a row of slide images once per interval, highlights
//! the matching navigation dot, freezes on the dot under the pointer and
//! resumes when the pointer leaves. It works against the [`Document`] and
//! [`Scheduler`] traits; [`Page`] supplies in-memory versions of both and
//! acts as the event loop.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod dom;
pub mod error;
pub mod page;
pub mod state;
pub mod timers;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use dom::{Document, Dom, NodeId};
pub use error::CarouselError;
pub use page::{Page, init};
pub use state::{AdvanceMode, CarouselState};
pub use timers::{PendingTimer, Scheduler, TimerId, Timers};
