use core::fmt;

use log::info;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Outcome},
    config::{ConfigError, GameConfig},
    placement::place_ships,
    shot::apply_shot,
    win::is_victory,
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    InProgress,
    Won,
    Cancelled,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// Errors returned by [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    Board(BoardError),
    /// The session already reached a terminal state.
    Finished(SessionStatus),
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "Invalid configuration: {}", e),
            SessionError::Board(e) => write!(f, "Board error: {}", e),
            SessionError::Finished(status) => write!(f, "Session already finished ({:?})", status),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// What happened after one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub outcome: Outcome,
    /// Length of the ship this hit completed, if any.
    pub sunk: Option<usize>,
    pub status: SessionStatus,
}

/// One game: owns the board for its whole lifetime.
pub struct GameSession {
    board: Board,
    status: SessionStatus,
    shots: usize,
    hits: usize,
    misses: usize,
}

impl GameSession {
    /// Validate `config`, create the board and place the fleet.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, SessionError> {
        config.validate()?;
        let mut board = Board::new(config.board_size)?;
        place_ships(&mut board, &config.ship_lengths, rng)?;
        info!(
            "new session: {}x{} board, {} ships",
            config.board_size,
            config.board_size,
            config.ship_lengths.len()
        );
        Ok(Self::from_board(board))
    }

    /// Start a session on a board whose ships are already placed.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            status: SessionStatus::InProgress,
            shots: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Shots fired, including repeats at resolved cells.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Fire at (`row`, `col`). The session is won as soon as a hit leaves no
    /// intact ship cell.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotReport, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Finished(self.status));
        }
        let outcome = apply_shot(&mut self.board, row, col)?;
        self.shots += 1;
        let mut sunk = None;
        match outcome {
            Outcome::Hit => {
                self.hits += 1;
                sunk = self
                    .board
                    .ship_at(row, col)
                    .filter(|ship| self.board.is_sunk(ship))
                    .map(|ship| ship.length());
                if is_victory(&self.board) {
                    self.status = SessionStatus::Won;
                    info!("all ships sunk after {} shots", self.shots);
                }
            }
            Outcome::Miss => self.misses += 1,
            Outcome::AlreadyResolved => {}
        }
        Ok(ShotReport {
            outcome,
            sunk,
            status: self.status,
        })
    }

    /// Stop the session on an external quit signal. Has no effect once the
    /// session is over.
    pub fn cancel(&mut self) -> SessionStatus {
        if self.status == SessionStatus::InProgress {
            self.status = SessionStatus::Cancelled;
            info!("session cancelled after {} shots", self.shots);
        }
        self.status
    }
}
