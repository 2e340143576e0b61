//! Game state module - the piece controller
//!
//! Ties together the grid, the active piece, the piece queue and scoring.
//! Every public operation leaves the state legal: while the phase is
//! `Running` there is an active piece and it does not collide. Tentative
//! moves are tested before they are committed, so nothing is ever rolled back
//! in place. Once the phase is `GameOver` every operation is a no-op.

use crate::collision::{fits, landing_y};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::kick::kick_offsets;
use crate::observer::{CoreEvent, LockEvent};
use crate::piece::ActivePiece;
use crate::rng::PieceQueue;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase, LINE_CLEAR_POINTS};

/// What a soft drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move and was locked into the grid
    Locked(LockEvent),
    /// Nothing happened (game over)
    Ignored,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    phase: Phase,
    /// Successful spawns in this session
    pieces_spawned: u32,
    /// Events not yet drained by the session/observers
    events: Vec<CoreEvent>,
}

impl GameState {
    /// Start a session on an empty board, seeded from `config`
    pub fn new(config: &GameConfig) -> Self {
        Self::with_queue(config, PieceQueue::new(config.seed))
    }

    /// Start a session on an empty board with a specific piece queue
    pub fn with_queue(config: &GameConfig, queue: PieceQueue) -> Self {
        let config = config.clone().sanitized();
        Self::with_grid(Grid::new(config.width, config.height), queue)
    }

    /// Start a session on a prepared board.
    ///
    /// The first piece spawns immediately. If it already collides the session
    /// starts (and stays) in `GameOver`.
    pub fn with_grid(grid: Grid, queue: PieceQueue) -> Self {
        let mut state = Self {
            grid,
            active: None,
            queue,
            score: 0,
            lines: 0,
            phase: Phase::Running,
            pieces_spawned: 0,
            events: Vec::new(),
        };
        if !state.spawn_piece() {
            state.push_game_over();
        }
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take all events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn the next piece; ends the game if it does not fit.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(&mut self.queue, self.grid.width());

        if piece.collides(&self.grid) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    fn push_game_over(&mut self) {
        self.events.push(CoreEvent::GameOver {
            score: self.score,
            lines: self.lines,
        });
    }

    /// The active piece, if the game is still running
    fn running_piece(&self) -> Option<ActivePiece> {
        match self.phase {
            Phase::Running => self.active,
            Phase::GameOver => None,
        }
    }

    /// Shift the piece horizontally by `delta` columns.
    ///
    /// The move happens in full or not at all. Returns whether it happened.
    pub fn move_horizontal(&mut self, delta: i32) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };

        let x = active.x + delta;
        if !fits(&self.grid, &active.shape, x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece { x, ..active });
        true
    }

    /// Move the piece down one row, or lock it if it cannot move.
    pub fn soft_drop(&mut self) -> DropOutcome {
        let Some(active) = self.running_piece() else {
            return DropOutcome::Ignored;
        };

        let y = active.y + 1;
        if fits(&self.grid, &active.shape, active.x, y) {
            self.active = Some(ActivePiece { y, ..active });
            return DropOutcome::Moved;
        }

        DropOutcome::Locked(self.lock_piece(active))
    }

    /// Merge the piece, clear lines, score, and spawn the next piece.
    fn lock_piece(&mut self, piece: ActivePiece) -> LockEvent {
        self.grid.merge(&piece.shape, piece.x, piece.y, piece.color);
        self.active = None;

        let cleared = self.grid.clear_full_lines() as u32;
        let points = cleared * LINE_CLEAR_POINTS;
        self.score += points;
        self.lines += cleared;

        let spawned = self.spawn_piece();
        let event = LockEvent {
            lines_cleared: cleared,
            points,
            score: self.score,
            lines: self.lines,
            game_over: !spawned,
        };

        // Lock first, then game over.
        self.events.push(CoreEvent::Locked(event));
        if !spawned {
            self.push_game_over();
        }
        event
    }

    /// Rotate the piece 90° clockwise.
    ///
    /// If the rotated shape does not fit in place, horizontal kicks of
    /// `+1, -1, +2, -2, ...` are tried up to the rotated shape's width. If none
    /// fits, the piece is left exactly as it was. Returns whether it rotated.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        let kicked_x = std::iter::once(0)
            .chain(kick_offsets(rotated.width()))
            .map(|offset| active.x + offset)
            .find(|&x| fits(&self.grid, &rotated, x, active.y));

        match kicked_x {
            Some(x) => {
                self.active = Some(ActivePiece {
                    shape: rotated,
                    x,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Apply one input intent. Returns whether it changed the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
        }
    }

    /// Row the active piece would land on if dropped straight down
    pub fn ghost_y(&self) -> Option<i32> {
        let active = self.running_piece()?;
        Some(landing_y(&self.grid, &active.shape, active.x, active.y))
    }

    /// Copy everything a renderer needs into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
