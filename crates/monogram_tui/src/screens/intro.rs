//! Intro screen — staged grid reveal with a one-shot auto-advance.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use super::center_rect;
use crate::screen::{Screen, ScreenTransition};

/// Milliseconds between grid cells appearing.
const REVEAL_STEP_MS: u128 = 200;

/// Milliseconds before the title fades in.
const TITLE_DELAY_MS: u128 = 2500;

/// State for the intro screen.
///
/// The nine grid cells appear one by one, driven by elapsed time; the
/// screen advances to name entry when the deadline passes or on any key.
/// The deadline is dropped with the screen, so nothing fires after
/// teardown.
#[derive(Debug)]
pub struct IntroScreen {
    started_at: Instant,
    deadline: Instant,
}

impl IntroScreen {
    /// Creates an intro screen that auto-advances after `duration`.
    #[instrument]
    pub fn new(duration: Duration) -> Self {
        let started_at = Instant::now();
        Self {
            started_at,
            deadline: started_at + duration,
        }
    }
}

impl Screen for IntroScreen {
    fn render(&self, frame: &mut Frame) {
        let container = center_rect(frame.area(), 27, 15);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(container);

        let elapsed = self.started_at.elapsed();
        let revealed = (elapsed.as_millis() / REVEAL_STEP_MS).min(9) as usize;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(chunks[0]);

        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Length(3),
                    Constraint::Length(7),
                    Constraint::Length(3),
                    Constraint::Length(7),
                ])
                .split(rows[row * 2]);

            for col in 0..3 {
                if row * 3 + col < revealed {
                    let cell = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan));
                    frame.render_widget(cell, cols[col * 2]);
                }
            }
        }

        if elapsed.as_millis() >= TITLE_DELAY_MS {
            let title = Paragraph::new("T I C  T A C  T O E")
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[2]);
        }

        let hint = Paragraph::new("press any key to skip")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => {
                debug!("Intro skipped by key press");
                ScreenTransition::GoToEntry
            }
        }
    }

    fn tick(&mut self) -> ScreenTransition {
        if Instant::now() >= self.deadline {
            debug!("Intro deadline reached");
            ScreenTransition::GoToEntry
        } else {
            ScreenTransition::Stay
        }
    }
}
