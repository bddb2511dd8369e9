//! Game state module - manages one game session
//!
//! This module ties together the grid, the active piece, the settled-piece
//! archive and scoring. It handles spawning, movement, rotation with a single
//! wall kick, settling, row clears and the game-over/new-game lifecycle.
//!
//! `GameState` is single-threaded and free of wall-clock time; the engine
//! crate wraps it in a lock and drives the restart countdown.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::catalog::{color, rotation_state};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceId, PieceKind, Rgb, Rotation};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An active piece is falling
    Falling,
    /// A spawn collided; moves are ignored until `start_new_game`
    GameOver,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// `None` only while game over
    active: Option<Piece>,
    /// Settled pieces of the current game, in settle order
    archive: Vec<Piece>,
    colors: HashMap<PieceId, Rgb>,
    score: u32,
    /// Final scores of finished games, oldest first
    scores: Vec<u32>,
    phase: Phase,
    rng: StdRng,
    revision: u64,
}

impl GameState {
    /// Create a session with a seeded RNG and spawn the first piece
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// Create a session seeded from the operating system
    pub fn from_entropy(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self, ConfigError> {
        let grid = Grid::new(width, height)?;
        let mut state = Self {
            grid,
            active: None,
            archive: Vec::new(),
            colors: HashMap::new(),
            score: 0,
            scores: Vec::new(),
            phase: Phase::Falling,
            rng,
            revision: 0,
        };
        state.spawn_piece();
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn archive(&self) -> &[Piece] {
        &self.archive
    }

    pub fn colors(&self) -> &HashMap<PieceId, Rgb> {
        &self.colors
    }

    /// Score of the game in progress
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Final scores of finished games, oldest first
    pub fn score_history(&self) -> &[u32] {
        &self.scores
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.colors.clone_from(&self.colors);
        out.score = self.score;
        out.game_over = self.is_game_over();
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action; returns whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Gravity step
    pub fn tick(&mut self) -> bool {
        trace!(revision = self.revision, "gravity tick");
        self.move_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Move down one row, or settle the piece if it is blocked
    pub fn move_down(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if self
            .grid
            .collides(active.x, active.y + 1, active.occupancy(), active.id())
        {
            self.settle();
        } else {
            active.y += 1;
        }
        self.revision += 1;
        true
    }

    /// Advance to the next rotation state, trying one leftward kick if blocked
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let (rotation, occupancy) = active.next_rotation();
        let mut x = active.x;

        if self.grid.collides(x, active.y, &occupancy, active.id()) {
            // Tall orientations widen when rotated; retry shifted left by the difference.
            if active.height() <= active.width() {
                return false;
            }
            let shift = (active.height() - active.width()) as i32;
            if self
                .grid
                .collides(x - shift, active.y, &occupancy, active.id())
            {
                return false;
            }
            x -= shift;
        }

        active.x = x;
        active.set_rotation(rotation, occupancy);
        self.revision += 1;
        true
    }

    /// Reset grid, archive, colors and score, then spawn. Score history is kept.
    pub fn start_new_game(&mut self) {
        self.grid.clear();
        self.archive.clear();
        self.colors.clear();
        self.score = 0;
        self.active = None;
        self.phase = Phase::Falling;
        info!(games_played = self.scores.len(), "starting new game");
        self.spawn_piece();
        self.revision += 1;
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let x = active.x + dx;
        let max_x = (self.grid.width() - active.width()) as i32;
        if !(0..=max_x).contains(&x) {
            return false;
        }
        if self.grid.collides(x, active.y, active.occupancy(), active.id()) {
            return false;
        }

        active.x = x;
        self.revision += 1;
        true
    }

    /// Merge the active piece, clear rows, and spawn the next piece
    fn settle(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.merge_piece(&piece);
        debug!(
            id = piece.id(),
            kind = piece.kind().as_str(),
            x = piece.x,
            y = piece.y,
            "piece settled"
        );
        self.archive.push(piece);

        let cleared = self.grid.clear_completed_rows();
        if cleared > 0 {
            self.score += cleared as u32;
            debug!(cleared, score = self.score, "rows cleared");
        }

        self.spawn_piece();
    }

    /// Spawn a random piece at the top. Returns false (and ends the game) if
    /// it collides immediately.
    fn spawn_piece(&mut self) -> bool {
        let id = self.archive.len() as PieceId + 1;

        // The last catalog kind is never drawn.
        let kind_index = self.rng.random_range(0..PieceKind::COUNT - 1);
        let kind = PieceKind::ALL[kind_index];
        let rotation = Rotation::from_index(self.rng.random_range(0..3));
        let piece_width = rotation_state(kind, rotation)[0].len();
        let x = self
            .rng
            .random_range(0..self.grid.width() - piece_width - 1) as i32;

        let piece = Piece::new(id, kind, rotation).at(x, 0);
        if self.grid.collides(piece.x, piece.y, piece.occupancy(), id) {
            self.game_over();
            return false;
        }

        trace!(id, kind = kind.as_str(), x, "spawned piece");
        self.colors.insert(id, color(kind));
        self.active = Some(piece);
        true
    }

    fn game_over(&mut self) {
        info!(score = self.score, pieces = self.archive.len(), "game over");
        self.scores.push(self.score);
        self.active = None;
        self.phase = Phase::GameOver;
    }
}
