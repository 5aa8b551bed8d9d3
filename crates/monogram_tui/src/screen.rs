//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use monogram::AnyMatch;
use ratatui::Frame;

/// The result of handling input (or the passage of time) on a screen.
///
/// Screens return this from [`Screen::handle_key`] and [`Screen::tick`] to
/// drive the [`AppController`](crate::controller::AppController) state
/// machine.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Navigate to the intro screen. `reset` clears the remembered names,
    /// matching the full-reset behavior; otherwise they survive the detour.
    GoToIntro {
        /// Whether to forget the entered names.
        reset: bool,
    },
    /// Navigate to the name entry screen.
    GoToEntry,
    /// Start playing a freshly started match.
    GoToGame(Box<AnyMatch>),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Called once per event-loop pass; lets screens run timed transitions.
    fn tick(&mut self) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
