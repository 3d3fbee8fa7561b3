//! Game state module - the session controller
//!
//! This module ties together board, bag and scoring. It owns all mutable
//! session state and exposes the player operations (move, rotate, soft/hard
//! drop, pause, reset) plus [`GameState::update`], which the host calls once
//! per frame with the elapsed time.
//!
//! Invalid moves are not errors: they are reverted and reported as `false`.

use std::collections::VecDeque;

use log::{debug, info};

use crate::bag::Bag;
use crate::board::Board;
use crate::piece::Tetromino;
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, PieceKind, KICK_OFFSETS, SOFT_DROP_INTERVAL_MS};

/// Events kept for the host; older ones are dropped when it does not drain.
pub const MAX_QUEUED_EVENTS: usize = 64;

/// Something the host may want to react to (HUD refresh, logging, sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece locked, clearing `cleared` rows and scoring `points`.
    Locked { cleared: u32, points: u32 },
    /// The level went up after a line clear.
    LevelUp { level: u32 },
    /// A freshly spawned piece did not fit.
    GameOver,
    /// The session was re-initialized.
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    bag: Bag,
    /// Falling piece. After a game over this is the piece that did not fit.
    active: Option<Tetromino>,
    next: PieceKind,
    seed: u64,
    /// Increments on every reset; mixed into the bag seed.
    episode_id: u32,
    score: u32,
    lines: u32,
    level: u32,
    soft_drop: bool,
    drop_accumulator_ms: u32,
    status: GameStatus,
    /// Bounded to [`MAX_QUEUED_EVENTS`], oldest first.
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Start a session on an empty default board.
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::default())
    }

    /// Start a session on a prepared board.
    ///
    /// The first piece is spawned immediately, so a board whose spawn rows
    /// are blocked starts out in [`GameStatus::GameOver`].
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut bag = Bag::new(seed);
        let next = bag.next();
        let mut state = Self {
            board,
            bag,
            active: None,
            next,
            seed,
            episode_id: 0,
            score: 0,
            lines: 0,
            level: 1,
            soft_drop: false,
            drop_accumulator_ms: 0,
            status: GameStatus::Running,
            events: VecDeque::with_capacity(MAX_QUEUED_EVENTS),
        };
        state.spawn_piece();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn soft_drop_active(&self) -> bool {
        self.soft_drop
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_accumulator_ms
    }

    /// Current gravity interval: the soft drop override, or the level value.
    pub fn drop_interval_ms(&self) -> u32 {
        if self.soft_drop {
            SOFT_DROP_INTERVAL_MS
        } else {
            get_drop_interval_ms(self.level)
        }
    }

    /// Replace the falling piece, e.g. to set up a position.
    ///
    /// Returns false (and keeps the old piece) if it does not fit.
    pub fn set_active(&mut self, piece: Tetromino) -> bool {
        if !self.board.can_place(&piece) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        let active = self.active.filter(|p| self.board.can_place(p));
        GameSnapshot {
            board: &self.board,
            active,
            ghost_y: self.ghost_y(),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            status: self.status,
            drop_interval_ms: self.drop_interval_ms(),
        }
    }

    /// Take the events queued since the last call.
    ///
    /// At most [`MAX_QUEUED_EVENTS`] are kept between calls; a host that
    /// never drains only sees the most recent ones.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Turn the queued next kind into the falling piece and draw a new next.
    ///
    /// Returns false, and ends the game, when the new piece does not fit.
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::new(self.next);
        self.next = self.bag.next();
        self.active = Some(piece);

        if !self.board.can_place(&piece) {
            self.status = GameStatus::GameOver;
            self.push_event(GameEvent::GameOver);
            info!(
                "game over: score {} lines {} level {}",
                self.score, self.lines, self.level
            );
            return false;
        }
        true
    }

    /// Shift the piece one column (`-1` left, `1` right).
    pub fn move_piece(&mut self, direction: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };
        piece.x += direction;
        if !self.board.can_place(&piece) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Rotate (`1` clockwise, `-1` counter-clockwise) with horizontal kicks.
    ///
    /// Offsets are tried in [`KICK_OFFSETS`] order; the first placeable one
    /// wins. If none fits the piece is left untouched.
    pub fn rotate(&mut self, direction: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut rotated = active;
        rotated.rotate(direction);
        for &dx in KICK_OFFSETS.iter() {
            let candidate = Tetromino {
                x: active.x + dx,
                ..rotated
            };
            if self.board.can_place(&candidate) {
                self.active = Some(candidate);
                return true;
            }
        }
        false
    }

    /// Hold or release soft drop. Applies in every state.
    pub fn soft_drop(&mut self, active: bool) {
        self.soft_drop = active;
    }

    /// Drop the piece to the bottom and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let mut rows = 0;
        while self.step_down() {
            rows += 1;
        }
        rows
    }

    /// Gravity step: move down one row, or lock if that is impossible.
    ///
    /// Returns true while the piece is still falling; false means it locked
    /// (and the next piece has spawned) or the game is not running.
    pub fn step_down(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };
        piece.y += 1;
        if self.board.can_place(&piece) {
            self.active = Some(piece);
            return true;
        }
        self.lock_piece();
        false
    }

    /// Lock the falling piece where it is, score, and spawn the next one.
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let cleared = self.board.lock(&piece);
        self.apply_line_clear(cleared);
        self.spawn_piece();
    }

    fn apply_line_clear(&mut self, cleared: usize) {
        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.push_event(GameEvent::Locked {
            cleared: cleared as u32,
            points,
        });

        let level = calculate_level(self.lines);
        if level != self.level {
            self.level = level;
            self.push_event(GameEvent::LevelUp { level });
            info!(
                "level {} reached, gravity {}ms",
                level,
                get_drop_interval_ms(level)
            );
        }
    }

    /// Row the falling piece would land on if hard dropped.
    ///
    /// `None` without a placeable falling piece. Never moves the real piece.
    pub fn ghost_y(&self) -> Option<i32> {
        let mut probe = self.active?;
        if !self.board.can_place(&probe) {
            return None;
        }
        loop {
            probe.y += 1;
            if !self.board.can_place(&probe) {
                return Some(probe.y - 1);
            }
        }
    }

    /// Flip between running and paused. Has no effect after a game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return false,
        };
        debug!("status -> {}", self.status.as_str());
        true
    }

    /// Re-initialize board, bag, score and timers, then spawn a piece.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.board = Board::new(self.board.width(), self.board.height());
        self.bag = Bag::new(self.seed.wrapping_add(self.episode_id as u64));
        self.next = self.bag.next();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.soft_drop = false;
        self.drop_accumulator_ms = 0;
        self.status = GameStatus::Running;
        self.push_event(GameEvent::Reset);
        info!("session reset (episode {})", self.episode_id);
        self.spawn_piece();
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// While running, time accumulates until it reaches the gravity interval;
    /// then exactly one gravity step happens and the accumulator restarts at
    /// zero. Excess time is dropped, so a long stall never causes a burst of
    /// steps. Returns whether a gravity step happened.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.drop_accumulator_ms = self.drop_accumulator_ms.saturating_add(elapsed_ms);
        if self.drop_accumulator_ms < self.drop_interval_ms() {
            return false;
        }
        self.step_down();
        self.drop_accumulator_ms = 0;
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::RotateCw => self.rotate(1),
            GameAction::RotateCcw => self.rotate(-1),
            GameAction::SoftDropStart => {
                self.soft_drop(true);
                true
            }
            GameAction::SoftDropStop => {
                self.soft_drop(false);
                true
            }
            GameAction::HardDrop => {
                if !self.is_running() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
