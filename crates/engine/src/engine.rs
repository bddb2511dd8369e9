//! Thread-safe session handle.
//!
//! Every mutation (gravity tick, moves, rotation) and every snapshot goes
//! through one mutex, so a renderer never sees a half-applied transition.
//! The game-over countdown is a deadline stored in the session: nothing
//! sleeps while holding the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::core::{ConfigError, GameSnapshot, GameState};
use crate::types::GameAction;

/// Everything an adapter needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub game: GameSnapshot,
    /// Final scores of finished games, oldest first
    pub score_history: Vec<u32>,
    /// Time left before a new game starts, while game over
    pub restart_in: Option<Duration>,
}

#[derive(Debug)]
struct Session {
    state: GameState,
    restart_delay: Duration,
    restart_at: Option<Instant>,
}

impl Session {
    /// `None` is a gravity tick.
    fn step(&mut self, action: Option<GameAction>, now: Instant) {
        if !self.state.is_game_over() {
            match action {
                Some(action) => {
                    self.state.apply_action(action);
                }
                None => {
                    self.state.tick();
                }
            }
        }
        self.poll_restart(now);
    }

    fn poll_restart(&mut self, now: Instant) {
        if !self.state.is_game_over() {
            return;
        }
        let deadline = *self.restart_at.get_or_insert(now + self.restart_delay);
        if now >= deadline {
            self.restart_at = None;
            self.state.start_new_game();
        }
    }

    fn snapshot_into(&self, out: &mut EngineSnapshot, now: Instant) {
        self.state.snapshot_into(&mut out.game);
        out.score_history.clear();
        out.score_history
            .extend_from_slice(self.state.score_history());
        out.restart_in = self
            .restart_at
            .map(|deadline| deadline.saturating_duration_since(now));
    }
}

/// Cloneable handle to one shared game session
#[derive(Debug, Clone)]
pub struct Engine {
    session: Arc<Mutex<Session>>,
    tick_interval: Duration,
}

impl Engine {
    /// Create a session; fails if the field is below the minimum size
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let state = match config.seed {
            Some(seed) => GameState::new(config.width, config.height, seed)?,
            None => GameState::from_entropy(config.width, config.height)?,
        };
        info!(
            width = config.width,
            height = config.height,
            tick_ms = config.tick_interval.as_millis() as u64,
            seed = ?config.seed,
            "session created"
        );

        Ok(Self {
            session: Arc::new(Mutex::new(Session {
                state,
                restart_delay: config.restart_delay,
                restart_at: None,
            })),
            tick_interval: config.tick_interval,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Every transition leaves the session consistent, so a panic elsewhere
        // does not invalidate it.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock for a read, first starting the next game if its countdown has
    /// run out, so readers never see an expired game over.
    fn lock_polled(&self, now: Instant) -> MutexGuard<'_, Session> {
        let mut session = self.lock();
        session.poll_restart(now);
        session
    }

    /// Advance gravity one step, or the restart countdown while game over
    pub fn tick(&self) {
        self.lock().step(None, Instant::now());
    }

    pub fn move_left(&self) {
        self.apply(GameAction::MoveLeft);
    }

    pub fn move_right(&self) {
        self.apply(GameAction::MoveRight);
    }

    pub fn move_down(&self) {
        self.apply(GameAction::MoveDown);
    }

    pub fn rotate(&self) {
        self.apply(GameAction::Rotate);
    }

    /// Apply a player action; ignored while game over
    pub fn apply(&self, action: GameAction) {
        self.lock().step(Some(action), Instant::now());
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut out = EngineSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill an existing snapshot, reusing its allocations
    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        let now = Instant::now();
        self.lock_polled(now).snapshot_into(out, now);
    }

    /// Final scores of finished games, oldest first
    pub fn score_history(&self) -> Vec<u32> {
        self.lock_polled(Instant::now())
            .state
            .score_history()
            .to_vec()
    }

    pub fn is_game_over(&self) -> bool {
        self.lock_polled(Instant::now()).state.is_game_over()
    }

    /// Spawn the gravity ticker on the current tokio runtime.
    ///
    /// The first tick fires one interval after spawning. Abort the returned
    /// handle to stop it.
    pub fn spawn_ticker(&self) -> JoinHandle<()> {
        let engine = self.clone();
        let period = self.tick_interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            debug!(period_ms = period.as_millis() as u64, "ticker started");

            loop {
                interval.tick().await;
                engine.tick();
            }
        })
    }
}
