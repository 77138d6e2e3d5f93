//! Application state and key handling.
//!
//! `App` is the view model: it owns the game [`Session`], the active
//! screen, the theme, and the board cursor. Key presses come in, and
//! [`AppCommand`]s go out for the event loop to act on (quit, arm or cancel
//! the opponent timer). Rendering reads `App` and never mutates it.

use std::time::Duration;

use brix_tictactoe::{BoardSize, GameEngine, Mode, OpponentTicket, Outcome, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::input::move_cursor;
use crate::theme::Theme;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title card with a start prompt.
    Start,
    /// Board size menu.
    BoardSize,
    /// Mode menu.
    ModeSelect,
    /// The board.
    Playing,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Nothing beyond redrawing.
    None,
    /// Exit the application.
    Quit,
    /// Deliver `ticket` back after `delay`.
    ArmOpponent {
        /// Ticket to deliver.
        ticket: OpponentTicket,
        /// How long to wait.
        delay: Duration,
    },
    /// Abort any armed opponent timer.
    CancelOpponent,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    theme: Theme,
    size: BoardSize,
    menu: usize,
    cursor: usize,
    session: Session,
}

impl App {
    /// Creates the application from configuration.
    ///
    /// The session is built up front with the configured opponent policy and
    /// is reused for every game. With a preselected mode the menus are skipped.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let size = *config.board_size();
        let mode = config.mode().unwrap_or(Mode::SingleOpponent);
        let engine = GameEngine::with_policy(size, mode, config.build_policy());
        info!(policy = engine.policy_name(), "Opponent policy ready");
        let mut app = Self {
            screen: Screen::Start,
            theme: *config.theme(),
            size,
            menu: 0,
            cursor: 0,
            session: Session::with_delay(engine, config.opponent_delay()),
        };
        if let Some(mode) = *config.mode() {
            app.start_game(mode);
        }
        app
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the highlighted menu row.
    pub fn menu_index(&self) -> usize {
        self.menu
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the size selected for the next game.
    pub fn selected_size(&self) -> BoardSize {
        self.size
    }

    /// Returns the game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True when the result dialog should be shown.
    pub fn show_result(&self) -> bool {
        self.screen == Screen::Playing && self.session.engine().is_over()
    }

    /// Status text under the board, empty outside play.
    pub fn status_line(&self) -> String {
        if self.screen != Screen::Playing {
            return String::new();
        }
        let engine = self.session.engine();
        match engine.outcome() {
            Outcome::Winner(mark) => format!("Player {} wins!", mark),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => match engine.mode() {
                Mode::SingleOpponent if engine.awaiting_opponent() => {
                    "AI is thinking...".to_string()
                }
                Mode::SingleOpponent => "Your turn".to_string(),
                Mode::TwoPlayer => format!("Player {}'s turn", engine.turn()),
            },
        }
    }

    /// Key hints for the active screen.
    pub fn help_line(&self) -> &'static str {
        match self.screen {
            Screen::Start => "Enter: Start | t: Theme | q: Quit",
            Screen::BoardSize => "↑↓: Navigate | Enter: Select | Esc: Back | t: Theme | q: Quit",
            Screen::ModeSelect => "↑↓: Navigate | Enter: Select | Esc: Back | t: Theme | q: Quit",
            Screen::Playing if self.show_result() => "r: Reset Game | b: Change mode | q: Quit",
            Screen::Playing => {
                "←↑↓→: Move | Enter: Place | r: Reset | b: Change mode | t: Theme | q: Quit"
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return AppCommand::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
                return AppCommand::None;
            }
            _ => {}
        }

        match self.screen {
            Screen::Start => self.handle_start(key.code),
            Screen::BoardSize => self.handle_size_menu(key.code),
            Screen::ModeSelect => self.handle_mode_menu(key.code),
            Screen::Playing => self.handle_board(key.code),
        }
    }

    /// Applies a delivered opponent ticket. Returns true if a mark landed.
    #[instrument(skip(self))]
    pub fn on_opponent_due(&mut self, ticket: OpponentTicket) -> bool {
        match self.session.fire(ticket) {
            Some(placement) => {
                debug!(%placement, "Opponent reply applied");
                true
            }
            None => false,
        }
    }

    fn handle_start(&mut self, code: KeyCode) -> AppCommand {
        if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.screen = Screen::BoardSize;
            self.menu = BoardSize::all().position(|s| s == self.size).unwrap_or(0);
        }
        AppCommand::None
    }

    fn handle_size_menu(&mut self, code: KeyCode) -> AppCommand {
        let sizes: Vec<BoardSize> = BoardSize::all().collect();
        match code {
            KeyCode::Up => self.menu = previous(self.menu, sizes.len()),
            KeyCode::Down => self.menu = next(self.menu, sizes.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(&size) = sizes.get(self.menu) {
                    info!(%size, "Board size selected");
                    self.size = size;
                    self.screen = Screen::ModeSelect;
                    self.menu = 0;
                }
            }
            KeyCode::Esc => self.screen = Screen::Start,
            _ => {}
        }
        AppCommand::None
    }

    fn handle_mode_menu(&mut self, code: KeyCode) -> AppCommand {
        let modes: Vec<Mode> = Mode::iter().collect();
        match code {
            KeyCode::Up => self.menu = previous(self.menu, modes.len()),
            KeyCode::Down => self.menu = next(self.menu, modes.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(&mode) = modes.get(self.menu) {
                    self.start_game(mode);
                }
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.screen = Screen::BoardSize;
                self.menu = BoardSize::all().position(|s| s == self.size).unwrap_or(0);
            }
            _ => {}
        }
        AppCommand::None
    }

    fn handle_board(&mut self, code: KeyCode) -> AppCommand {
        let session = &mut self.session;

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let update = session.apply_move(self.cursor);
                match update.scheduled {
                    Some(ticket) => AppCommand::ArmOpponent {
                        ticket,
                        delay: session.opponent_delay(),
                    },
                    None => AppCommand::None,
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                session.reset_board();
                self.cursor = 0;
                AppCommand::CancelOpponent
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                session.cancel();
                info!("Returning to mode selection");
                self.screen = Screen::ModeSelect;
                self.menu = Mode::iter()
                    .position(|mode| mode == session.engine().mode())
                    .unwrap_or(0);
                AppCommand::CancelOpponent
            }
            code => {
                self.cursor = move_cursor(self.cursor, session.engine().size(), code);
                AppCommand::None
            }
        }
    }

    /// Enters play with `mode` on the selected size, clearing the score.
    fn start_game(&mut self, mode: Mode) {
        if self.session.engine().size() != self.size {
            self.session.change_size(self.size);
        }
        self.session.change_mode(mode);
        info!(%mode, size = %self.size, "Game started");
        self.cursor = 0;
        self.screen = Screen::Playing;
    }
}

fn previous(index: usize, count: usize) -> usize {
    if index == 0 { count - 1 } else { index - 1 }
}

fn next(index: usize, count: usize) -> usize {
    (index + 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> AppCommand {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_menu_flow_to_playing() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(app.screen(), Screen::Start);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::BoardSize);
        assert_eq!(app.menu_index(), 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::ModeSelect);
        assert_eq!(app.selected_size().side(), 5);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Playing);
        let engine = app.session().engine();
        assert_eq!(engine.mode(), Mode::TwoPlayer);
        assert_eq!(engine.board().len(), 25);
    }

    #[test]
    fn test_menu_wraps() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_index(), 4);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_index(), 0);
    }

    #[test]
    fn test_escape_walks_back() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::ModeSelect);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::BoardSize);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Start);
    }

    #[test]
    fn test_theme_toggles_anywhere() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(press(&mut app, KeyCode::Char('t')), AppCommand::None);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.screen(), Screen::Start);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppCommand::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppCommand::Quit
        );
    }

    #[test]
    fn test_session_uses_configured_policy() {
        let app = App::new(&AppConfig::default());
        assert_eq!(app.session().engine().policy_name(), "lowest_empty");

        let config = AppConfig::from_toml("[opponent]\npolicy = \"random\"\nseed = 4").unwrap();
        let app = App::new(&config);
        assert_eq!(app.session().engine().policy_name(), "random");
        assert_eq!(app.session().opponent_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_status_lines() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(app.status_line(), "");
        app.start_game(Mode::TwoPlayer);
        assert_eq!(app.status_line(), "Player X's turn");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_line(), "Player O's turn");

        app.start_game(Mode::SingleOpponent);
        assert_eq!(app.status_line(), "Your turn");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_line(), "AI is thinking...");
    }
}
