//! Game screen — board, players, rules, and result display.

use crossterm::event::{KeyCode, KeyEvent};
use monogram::{AnyMatch, Position, Seat, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, instrument};

use super::center_rect;
use crate::input;
use crate::screen::{Screen, ScreenTransition};

const RULES: &[&str] = &[
    "• Your monogram is your initials, or the first three letters of a single-word name.",
    "• Each turn places the next letter of your monogram.",
    "• Win by aligning any arrangement of your monogram on a row, column, or diagonal — using only cells you placed.",
    "• The board filling with no winner is a draw.",
];

/// State for the game screen.
#[derive(Debug)]
pub struct GameScreen {
    game: AnyMatch,
    cursor: Position,
}

impl GameScreen {
    /// Creates a game screen around a started match.
    pub fn new(game: AnyMatch) -> Self {
        Self {
            game,
            cursor: Position::Center,
        }
    }

    /// Applies a placement.
    ///
    /// Occupied cells and concluded matches are silent no-ops: the engine's
    /// rejection is logged and the previous state kept.
    #[instrument(skip(self))]
    fn place_at(&mut self, position: Position) {
        match self.game.clone().place(position) {
            Ok(next) => {
                debug!(position = %position, "Placement applied");
                self.game = next;
            }
            Err(e) => {
                debug!(error = %e, "Placement ignored");
            }
        }
    }

    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let board_area = center_rect(area, 40, 11);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(board_area);

        self.render_row(frame, rows[0], 0);
        render_separator(frame, rows[1]);
        self.render_row(frame, rows[2], 3);
        render_separator(frame, rows[3]);
        self.render_row(frame, rows[4], 6);
    }

    fn render_row(&self, frame: &mut Frame, area: Rect, start: usize) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(34),
            ])
            .split(area);

        self.render_square(frame, cols[0], start);
        render_vertical_sep(frame, cols[1]);
        self.render_square(frame, cols[2], start + 1);
        render_vertical_sep(frame, cols[3]);
        self.render_square(frame, cols[4], start + 2);
    }

    fn render_square(&self, frame: &mut Frame, area: Rect, index: usize) {
        let Some(pos) = Position::from_index(index) else {
            return;
        };

        let (text, mut style) = match self.game.board().get(pos) {
            Square::Empty => (
                format!("{}", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Marked {
                glyph,
                owner: Seat::A,
            } => (
                glyph.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Square::Marked {
                glyph,
                owner: Seat::B,
            } => (
                glyph.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        if self.game.winning_cells().contains(&pos) {
            style = Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        } else if pos == self.cursor && !self.game.is_over() {
            style = style.bg(Color::DarkGray);
        }

        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let player_lines: Vec<Line> = match self.game.players() {
            Some(players) => vec![
                Line::from(vec![
                    Span::styled(
                        players.seat(Seat::A).monogram().as_str().to_string(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}", players.seat(Seat::A).name())),
                ]),
                Line::from(vec![
                    Span::styled(
                        players.seat(Seat::B).monogram().as_str().to_string(),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}", players.seat(Seat::B).name())),
                ]),
            ],
            None => vec![],
        };
        let players = Paragraph::new(player_lines)
            .block(Block::default().borders(Borders::ALL).title("Players"));
        frame.render_widget(players, chunks[0]);

        let status_style = match (self.game.winner(), self.game.is_over()) {
            (Some(_), _) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            (None, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (None, false) => Style::default(),
        };
        let status = Paragraph::new(self.game.status_string())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        let rule_lines: Vec<Line> = RULES.iter().map(|r| Line::from(*r)).collect();
        let rules = Paragraph::new(rule_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Rules"));
        frame.render_widget(rules, chunks[2]);
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Monogram Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_board(frame, content[0]);
        self.render_side_panel(frame, content[1]);

        let help_text = if self.game.is_over() {
            "r: play again | b: back to entry | q: quit"
        } else {
            "←↑↓→: move | Enter/Space: place | 1-9: place | b: back | r: reset | q: quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.place_at(pos);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToIntro { reset: true },
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => ScreenTransition::GoToEntry,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
