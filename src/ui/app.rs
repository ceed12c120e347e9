use crate::error::{MoveRejection, OpponentMoveError};
use crate::game::{GameOutcome, Placement, SIZE};
use crate::session::{GameMode, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

pub struct App {
    session: Session,
    cursor: usize,
    opponent_delay: Duration,
    opponent_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, opponent_delay: Duration) -> Self {
        App {
            session,
            cursor: 5, // Near the middle
            opponent_delay,
            opponent_due: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn opponent_pending(&self) -> bool {
        self.opponent_due.is_some()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Play the opponent's move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        match self.opponent_due {
            Some(due) if now >= due => {
                self.opponent_due = None;
                match self.session.request_opponent_move() {
                    Ok(placement) => self.report(placement),
                    Err(err @ OpponentMoveError::IllegalMove(_))
                    | Err(err @ OpponentMoveError::NoLegalMove) => {
                        warn!(error = %err, "opponent failed to move");
                        self.message = Some(format!("Opponent error: {}", err));
                    }
                    // Game was restarted or the mode changed meanwhile
                    Err(_) => {}
                }
            }
            _ => {}
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor % SIZE > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % SIZE < SIZE - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= SIZE {
                    self.cursor -= SIZE;
                }
            }
            KeyCode::Down => {
                if self.cursor + SIZE < SIZE * SIZE {
                    self.cursor += SIZE;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.opponent_due = None;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('h') => self.switch_mode(GameMode::HumanVsHuman),
            KeyCode::Char('a') => self.switch_mode(GameMode::HumanVsAi),
            _ => {}
        }
    }

    fn switch_mode(&mut self, mode: GameMode) {
        self.session.set_mode(mode);
        self.opponent_due = None;
        self.message = Some(format!("New game: {}", mode));
    }

    /// Place the current mark under the cursor
    fn place_mark(&mut self) {
        match self.session.submit_move(self.cursor) {
            Ok(placement) => {
                self.message = None;
                self.report(placement);
                if self.session.awaiting_opponent() {
                    self.opponent_due = Some(Instant::now() + self.opponent_delay);
                }
            }
            // Clicking a taken cell is simply ignored
            Err(MoveRejection::CellOccupied(_)) | Err(MoveRejection::OpponentToMove) => {}
            Err(MoveRejection::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveRejection::InvalidCell(_)) => {
                self.message = Some("Invalid cell!".to_string());
            }
        }
    }

    fn report(&mut self, placement: Placement) {
        if let Some(outcome) = placement.outcome {
            self.message = Some(match outcome {
                GameOutcome::Winner(mark) => format!("{} wins!", mark),
                GameOutcome::Draw => "It's a tie!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, self.message.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomOpponent;
    use crate::game::{Cell, Mark};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(mode: GameMode) -> App {
        let session = Session::with_opponent(mode, Box::new(RandomOpponent::seeded(3)));
        App::new(session, Duration::from_millis(500))
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app(GameMode::HumanVsHuman);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Up));
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.cursor(), 0);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor(), 15);
    }

    #[test]
    fn test_enter_places_mark_under_cursor() {
        let mut app = app(GameMode::HumanVsHuman);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.session().state().board().get(5),
            Some(Cell::Taken(Mark::X))
        );
        // Same cell again is ignored
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session().state().current_player(), Mark::O);
    }

    #[test]
    fn test_opponent_moves_after_delay() {
        let mut app = app(GameMode::HumanVsAi);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.opponent_pending());

        // Human input during the delay is not queued
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session().state().board().count(Mark::X), 1);

        app.tick(Instant::now());
        assert!(app.opponent_pending());
        assert_eq!(app.session().state().board().count(Mark::O), 0);

        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(!app.opponent_pending());
        assert_eq!(app.session().state().board().count(Mark::O), 1);
        assert_eq!(app.session().state().current_player(), Mark::X);
    }

    #[test]
    fn test_restart_cancels_pending_opponent() {
        let mut app = app(GameMode::HumanVsAi);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.opponent_pending());

        app.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(app.session().state().board().empty_cells().len(), 16);
    }

    #[test]
    fn test_mode_keys_switch_and_restart() {
        let mut app = app(GameMode::HumanVsHuman);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.session().mode(), GameMode::HumanVsAi);
        assert_eq!(app.session().state().board().count(Mark::X), 0);
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.session().mode(), GameMode::HumanVsHuman);
    }

    #[test]
    fn test_quit() {
        let mut app = app(GameMode::HumanVsHuman);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
