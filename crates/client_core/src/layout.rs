//! Strip geometry and control predicates.
//!
//! Everything here is a pure function of the item count, the cursor and the
//! measured strip width, so hosts can recompute it as often as they like.

use std::{fmt, time::Duration};

/// Duration of the slide played after a navigation step.
pub const SLIDE_DURATION: Duration = Duration::from_millis(800);

/// Ease-out curve used by the slide.
pub const SLIDE_EASING: CubicBezier = CubicBezier {
    x1: 0.165,
    y1: 0.84,
    x2: 0.44,
    y2: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// How the strip moves to a new offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Animated {
        duration: Duration,
        easing: CubicBezier,
    },
    Immediate,
}

impl Transition {
    pub const SLIDE: Transition = Transition::Animated {
        duration: SLIDE_DURATION,
        easing: SLIDE_EASING,
    };

    /// CSS `transition` value for the strip's `left` property.
    pub fn css(&self) -> String {
        match self {
            Transition::Animated { duration, easing } => {
                format!("left {}ms {easing}", duration.as_millis())
            }
            Transition::Immediate => "initial".to_string(),
        }
    }
}

/// Relative sizes applied once when the items are first rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    /// Strip width as a percentage of the viewport.
    pub container_width_percent: f64,
    /// Width of each item as a percentage of the strip.
    pub item_width_percent: f64,
}

impl StripLayout {
    pub fn for_items(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = count as f64;
        Some(Self {
            container_width_percent: 100.0 * count,
            item_width_percent: 100.0 / count,
        })
    }
}

/// Enabled state of the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl ControlState {
    /// Controls shown before the catalog arrives.
    pub const INITIAL: ControlState = ControlState {
        prev_enabled: false,
        next_enabled: true,
    };

    pub fn at(current_block: usize, count: usize) -> Self {
        Self {
            prev_enabled: current_block > 0,
            next_enabled: current_block + 1 < count,
        }
    }
}

pub fn item_width(container_width: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    container_width / count as f64
}

/// Horizontal offset, in pixels, that brings `current_block` into view.
pub fn strip_offset(container_width: f64, count: usize, current_block: usize) -> f64 {
    -(item_width(container_width, count) * current_block as f64)
}
