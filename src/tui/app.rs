//! Application state for the TUI.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::focus::SessionClock;
use crate::tui::art::{self, Art};

/// User command decoded from a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Pause or resume the countdown.
    TogglePause,
    /// End the current interval early.
    Skip,
    /// Show the next art.
    NextArt,
    /// Show the previous art.
    PreviousArt,
    /// Open the help overlay.
    ToggleHelp,
}

/// Application state.
pub struct App {
    /// Pomodoro state machine.
    pub clock: SessionClock,
    /// Index into the art table.
    pub art_index: usize,
    /// Whether the next keypress is swallowed to dismiss help.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app showing the art called `art_name`.
    ///
    /// Unknown names fall back to the first art.
    #[must_use]
    pub fn new(art_name: &str) -> Self {
        let art_index = art::find(art_name).unwrap_or_else(|| {
            warn!(art = art_name, "unknown art, using the first one");
            0
        });

        Self {
            clock: SessionClock::new(),
            art_index,
            show_help: false,
            should_quit: false,
        }
    }

    /// Currently displayed art.
    #[must_use]
    pub fn art(&self) -> &'static Art {
        art::get(self.art_index)
    }

    /// Apply a decoded action at `now`.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.clock.toggle_pause(now),
            Action::Skip => self.clock.skip(now),
            Action::NextArt => {
                self.art_index = art::next_index(self.art_index);
                debug!(art = self.art().name, "art changed");
            }
            Action::PreviousArt => {
                self.art_index = art::previous_index(self.art_index);
                debug!(art = self.art().name, "art changed");
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
    }
}
