#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    AutoAdvancing,         // Interval timer is live, ticks advance the key
    Paused { at: usize },  // Pointer is over a nav element, timer is cancelled
}

impl CarouselState {
    pub fn is_paused(&self) -> bool {
        matches!(self, CarouselState::Paused { .. })
    }
}

/// How a tick wraps the key back to the first slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AdvanceMode {
    /// Reset to 0 when the key sits on the last slide *before* drawing.
    /// With three slides the auto-advance draws `0, 1, 0, 1, ...` and the
    /// last slide is only reached by hovering it.
    #[default]
    Legacy,
    /// Reset to 0 once the key has moved past the last slide, so every
    /// slide is drawn in turn.
    FullCycle,
}
