//! App controller — the state machine driving the three screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use monogram::Seat;
use ratatui::{Terminal, backend::Backend};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{EntryScreen, GameScreen, IntroScreen};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    Intro(IntroScreen),
    Entry(EntryScreen),
    Game(GameScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug)]
pub struct AppController {
    intro_duration: Duration,
    skip_intro: bool,
    /// Names remembered across screens; cleared on full reset.
    names: Option<(String, String)>,
}

impl AppController {
    /// Creates a new controller from the parsed CLI options.
    #[instrument(skip(cli))]
    pub fn new(cli: &Cli) -> Self {
        info!("Creating AppController");
        let names = match (&cli.name_a, &cli.name_b) {
            (None, None) => None,
            (a, b) => Some((
                a.clone().unwrap_or_default(),
                b.clone().unwrap_or_default(),
            )),
        };
        Self {
            intro_duration: Duration::from_secs_f64(cli.intro_secs),
            skip_intro: cli.skip_intro,
            names,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");

        let mut screen = if self.skip_intro {
            ActiveScreen::Entry(self.entry_screen())
        } else {
            ActiveScreen::Intro(IntroScreen::new(self.intro_duration))
        };

        loop {
            // Render current screen.
            terminal.draw(|f| match &screen {
                ActiveScreen::Intro(s) => s.render(f),
                ActiveScreen::Entry(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
            })?;

            // Timed transitions (the intro's one-shot auto-advance).
            let transition = match &mut screen {
                ActiveScreen::Intro(s) => s.tick(),
                ActiveScreen::Entry(s) => s.tick(),
                ActiveScreen::Game(s) => s.tick(),
            };
            if !matches!(transition, ScreenTransition::Stay) {
                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => return Ok(()),
                };
                continue;
            }

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Intro(s) => s.handle_key(key),
                    ActiveScreen::Entry(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");

        // Capture names typed on the entry screen before leaving it.
        if let ActiveScreen::Entry(s) = &current
            && !matches!(transition, ScreenTransition::Stay)
        {
            self.names = Some((s.name_a().clone(), s.name_b().clone()));
        }

        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToIntro { reset } => {
                if reset {
                    debug!("Full reset — clearing names");
                    self.names = None;
                }
                info!("Navigating to Intro");
                Some(ActiveScreen::Intro(IntroScreen::new(self.intro_duration)))
            }

            ScreenTransition::GoToEntry => {
                info!("Navigating to Entry");
                Some(ActiveScreen::Entry(self.entry_screen()))
            }

            ScreenTransition::GoToGame(game) => {
                if let Some(players) = game.players() {
                    self.names = Some((
                        players.seat(Seat::A).name().to_string(),
                        players.seat(Seat::B).name().to_string(),
                    ));
                }
                info!("Navigating to Game");
                Some(ActiveScreen::Game(GameScreen::new(*game)))
            }

            ScreenTransition::Quit => None,
        }
    }

    /// Builds an entry screen, restoring remembered names if any.
    fn entry_screen(&self) -> EntryScreen {
        match &self.names {
            Some((a, b)) => EntryScreen::with_names(a.clone(), b.clone()),
            None => EntryScreen::new(),
        }
    }
}
