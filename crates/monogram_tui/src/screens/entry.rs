//! Name entry screen — two fields, monogram preview, validation notice.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use monogram::{AnyMatch, MatchSetup, Monogram, Seat};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// State for the name entry screen.
///
/// Two free-text fields; the focused field receives keystrokes. Starting
/// with a blank name surfaces a blocking notice and the match does not
/// start — every other path out of this screen is a navigation.
#[derive(Debug, Getters)]
pub struct EntryScreen {
    name_a: String,
    name_b: String,
    #[getter(skip)]
    focus: Seat,
    #[getter(skip)]
    error_message: Option<String>,
}

impl EntryScreen {
    /// Creates an empty entry screen.
    pub fn new() -> Self {
        Self {
            name_a: String::new(),
            name_b: String::new(),
            focus: Seat::A,
            error_message: None,
        }
    }

    /// Creates an entry screen with prefilled names.
    pub fn with_names(name_a: String, name_b: String) -> Self {
        Self {
            name_a,
            name_b,
            focus: Seat::A,
            error_message: None,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Seat::A => &mut self.name_a,
            Seat::B => &mut self.name_b,
        }
    }

    /// Attempts to start the match from the entered names.
    #[instrument(skip(self))]
    fn start_match(&mut self) -> Option<AnyMatch> {
        match MatchSetup::new().start(&self.name_a, &self.name_b) {
            Ok(live) => {
                info!("Match started from entry screen");
                Some(live.into())
            }
            Err(e) => {
                debug!(error = %e, "Match start rejected");
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    fn render_field(&self, frame: &mut Frame, area: ratatui::layout::Rect, seat: Seat) {
        let (name, heading) = match seat {
            Seat::A => (&self.name_a, "Player A (starts)"),
            Seat::B => (&self.name_b, "Player B"),
        };

        // Live preview of the monogram the name would produce.
        let title = match Monogram::from_name(name) {
            Some(monogram) => format!("{} — monogram: {}", heading, monogram),
            None => heading.to_string(),
        };

        let style = if self.focus == seat {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let field = Paragraph::new(name.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(field, area);
    }
}

impl Default for EntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for EntryScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Enter the Players")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.render_field(frame, chunks[1], Seat::A);
        self.render_field(frame, chunks[2], Seat::B);

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Type name | Tab: switch field | Enter: start | Esc: back to home")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
                self.error_message = None;
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                self.error_message = None;
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.start_match() {
                Some(game) => ScreenTransition::GoToGame(Box::new(game)),
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc => ScreenTransition::GoToIntro { reset: false },
            _ => ScreenTransition::Stay,
        }
    }
}
