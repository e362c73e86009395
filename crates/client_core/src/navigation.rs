use tracing::debug;

use crate::layout::ControlState;

/// The two navigation controls of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Prev,
    Next,
}

impl NavControl {
    /// Resolves the control from the class name of the activated element.
    pub fn from_element_class(class_name: &str) -> Option<Self> {
        match class_name {
            "prev" => Some(NavControl::Prev),
            "next" => Some(NavControl::Next),
            _ => None,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            NavControl::Prev => "prev",
            NavControl::Next => "next",
        }
    }
}

/// Notification emitted after the cursor moved, carrying the new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockChange {
    PrevBlock(usize),
    NextBlock(usize),
}

impl BlockChange {
    pub fn current_block(self) -> usize {
        match self {
            BlockChange::PrevBlock(block) | BlockChange::NextBlock(block) => block,
        }
    }
}

/// Index of the visible block, bounded by the number of blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    current: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn controls(&self) -> ControlState {
        ControlState::at(self.current, self.len)
    }

    /// Moves one block towards `control`, or returns `None` when already at that bound.
    pub fn step(&mut self, control: NavControl) -> Option<BlockChange> {
        let change = match control {
            NavControl::Prev if self.current > 0 => {
                self.current -= 1;
                BlockChange::PrevBlock(self.current)
            }
            NavControl::Next if self.current + 1 < self.len => {
                self.current += 1;
                BlockChange::NextBlock(self.current)
            }
            _ => {
                debug!(
                    control = control.class_name(),
                    current = self.current,
                    len = self.len,
                    "navigation clamped"
                );
                return None;
            }
        };
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_controls_from_class_names() {
        assert_eq!(NavControl::from_element_class("prev"), Some(NavControl::Prev));
        assert_eq!(NavControl::from_element_class("next"), Some(NavControl::Next));
        assert_eq!(NavControl::from_element_class("blocks"), None);
        assert_eq!(NavControl::from_element_class("prev disabled"), None);
    }

    #[test]
    fn next_advances_until_last_block() {
        let mut cursor = Cursor::new(3);
        assert_eq!(cursor.step(NavControl::Next), Some(BlockChange::NextBlock(1)));
        assert_eq!(cursor.step(NavControl::Next), Some(BlockChange::NextBlock(2)));
        assert_eq!(cursor.step(NavControl::Next), None);
        assert_eq!(cursor.current(), 2);
    }

    #[test]
    fn prev_is_clamped_at_first_block() {
        let mut cursor = Cursor::new(3);
        assert_eq!(cursor.step(NavControl::Prev), None);
        assert_eq!(cursor.current(), 0);

        cursor.step(NavControl::Next);
        assert_eq!(cursor.step(NavControl::Prev), Some(BlockChange::PrevBlock(0)));
    }

    #[test]
    fn empty_cursor_never_moves() {
        let mut cursor = Cursor::default();
        assert!(cursor.is_empty());
        assert_eq!(cursor.step(NavControl::Next), None);
        assert_eq!(cursor.step(NavControl::Prev), None);
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn single_block_is_clamped_both_ways() {
        let mut cursor = Cursor::new(1);
        assert_eq!(cursor.step(NavControl::Next), None);
        assert_eq!(cursor.step(NavControl::Prev), None);
        assert_eq!(
            cursor.controls(),
            ControlState { prev_enabled: false, next_enabled: false }
        );
    }
}
