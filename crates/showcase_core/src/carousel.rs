//! Member carousel state machine.
//!
//! A fixed roster paginated through a 3-wide visible window. Arrow
//! dimming reflects proximity to the boundary but never disables the
//! step operations - a step at the boundary is simply a no-op.

use std::ops::Range;

/// Number of roster entries visible at once.
pub const VISIBLE_WINDOW: usize = 3;

/// Visual state of one arrow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDim {
    /// At the boundary: opacity 0.
    Hidden,
    /// One step from the boundary: opacity 0.5.
    Faded,
    /// Anywhere else: fully opaque.
    Opaque,
}

impl ArrowDim {
    /// The opacity the shell applies to the arrow.
    pub fn opacity(self) -> f32 {
        match self {
            ArrowDim::Hidden => 0.0,
            ArrowDim::Faded => 0.5,
            ArrowDim::Opaque => 1.0,
        }
    }
}

/// Windowed pagination over a fixed-size roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    member_count: usize,
    current_index: usize,
}

impl Carousel {
    /// Start at the first page. Lives for the application lifetime.
    pub fn new(member_count: usize) -> Self {
        Self {
            member_count,
            current_index: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// Highest reachable index: `max(0, member_count - 3)`.
    pub fn last_page(&self) -> usize {
        self.member_count.saturating_sub(VISIBLE_WINDOW)
    }

    pub fn can_step_left(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_step_right(&self) -> bool {
        self.current_index < self.last_page()
    }

    /// Step one entry towards the start; no-op at the boundary.
    pub fn step_left(&mut self) {
        if self.can_step_left() {
            self.current_index -= 1;
        }
    }

    /// Step one entry towards the end; no-op at the boundary.
    pub fn step_right(&mut self) {
        if self.can_step_right() {
            self.current_index += 1;
        }
    }

    /// Whether the roster entry at `index` is inside the visible window.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.current_index && index < self.current_index + VISIBLE_WINDOW
    }

    /// The visible window, clipped to the roster.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + VISIBLE_WINDOW).min(self.member_count);
        self.current_index..end
    }

    /// Dimming of the left arrow for the current page.
    pub fn left_dim(&self) -> ArrowDim {
        match self.current_index {
            0 => ArrowDim::Hidden,
            1 => ArrowDim::Faded,
            _ => ArrowDim::Opaque,
        }
    }

    /// Dimming of the right arrow for the current page.
    pub fn right_dim(&self) -> ArrowDim {
        let last = self.last_page();
        if self.current_index == last {
            ArrowDim::Hidden
        } else if self.current_index + 1 == last {
            ArrowDim::Faded
        } else {
            ArrowDim::Opaque
        }
    }
}
