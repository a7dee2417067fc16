//! Entrance animations
//!
//! Every animated element starts transparent and shifted vertically, then
//! fades and slides into place exactly once. `Motion` says when and how;
//! `RevealState` remembers whether it already happened.

use serde::Serialize;

/// What starts an entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTrigger {
    /// As soon as the element is mounted
    Mount,
    /// The first time the element intersects the viewport
    FirstViewportEntry,
}

/// Fade/slide entrance parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub trigger: RevealTrigger,
    /// Starting vertical offset in pixels (negative slides down into place)
    pub offset_y: f64,
    pub duration_ms: u32,
}

impl Motion {
    pub const HEADER: Motion = Motion {
        trigger: RevealTrigger::Mount,
        offset_y: -10.0,
        duration_ms: 500,
    };

    pub const CARD: Motion = Motion {
        trigger: RevealTrigger::Mount,
        offset_y: 10.0,
        duration_ms: 300,
    };

    pub const CHART: Motion = Motion {
        trigger: RevealTrigger::FirstViewportEntry,
        offset_y: 20.0,
        duration_ms: 400,
    };

    pub const SUMMARY_PANEL: Motion = Motion {
        trigger: RevealTrigger::FirstViewportEntry,
        offset_y: 20.0,
        duration_ms: 400,
    };

    /// Inline style before the entrance has played
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: 0; transform: translateY({}px); {}",
            self.offset_y,
            self.transition()
        )
    }

    /// Inline style once revealed
    pub fn revealed_style(&self) -> String {
        format!("opacity: 1; transform: translateY(0px); {}", self.transition())
    }

    fn transition(&self) -> String {
        format!(
            "transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
            ms = self.duration_ms
        )
    }
}

/// One-shot reveal flag for a single element
///
/// Once revealed it stays revealed; later visibility changes are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    motion: Motion,
    revealed: bool,
}

impl RevealState {
    pub fn new(motion: Motion) -> Self {
        Self {
            motion,
            revealed: false,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Element was mounted. Returns true if this started the entrance.
    pub fn on_mount(&mut self) -> bool {
        match self.motion.trigger {
            RevealTrigger::Mount => self.reveal(),
            RevealTrigger::FirstViewportEntry => false,
        }
    }

    /// Element's viewport intersection changed. Returns true if this started
    /// the entrance.
    pub fn on_visibility(&mut self, intersecting: bool) -> bool {
        match self.motion.trigger {
            RevealTrigger::FirstViewportEntry if intersecting => self.reveal(),
            _ => false,
        }
    }

    /// Whether the element still needs a visibility observer
    pub fn wants_observer(&self) -> bool {
        self.motion.trigger == RevealTrigger::FirstViewportEntry && !self.revealed
    }

    /// Inline style for the current state
    pub fn style(&self) -> String {
        if self.revealed {
            self.motion.revealed_style()
        } else {
            self.motion.hidden_style()
        }
    }

    fn reveal(&mut self) -> bool {
        let fired = !self.revealed;
        self.revealed = true;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_trigger_fires_once() {
        let mut state = RevealState::new(Motion::CARD);

        assert!(!state.is_revealed());
        assert!(state.on_mount());
        assert!(state.is_revealed());
        assert!(!state.on_mount());
        assert!(!state.on_visibility(true));
    }

    #[test]
    fn test_viewport_trigger_fires_on_first_entry_only() {
        let mut state = RevealState::new(Motion::CHART);

        assert!(!state.on_mount());
        assert!(!state.on_visibility(false));
        assert!(state.wants_observer());

        assert!(state.on_visibility(true));
        assert!(!state.wants_observer());

        // Scrolling away and back does not replay or hide it
        assert!(!state.on_visibility(false));
        assert!(state.is_revealed());
        assert!(!state.on_visibility(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_styles() {
        let mut state = RevealState::new(Motion::SUMMARY_PANEL);
        assert!(state.style().starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(state.style().contains("400ms"));

        state.on_visibility(true);
        assert!(state.style().starts_with("opacity: 1; transform: translateY(0px);"));
    }

    #[test]
    fn test_header_slides_down() {
        assert!(Motion::HEADER.hidden_style().contains("translateY(-10px)"));
        assert!(Motion::HEADER.hidden_style().contains("500ms"));
    }
}
