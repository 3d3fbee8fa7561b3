use crate::board::Board;
use crate::piece::Tetromino;
use crate::types::{GameStatus, PieceKind};

/// Read-only view of a session, handed to renderers.
///
/// Borrowing the board immutably means a renderer holding a snapshot cannot
/// touch the game while it draws.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub board: &'a Board,
    /// Falling piece, omitted when it does not fit (after a game over).
    pub active: Option<Tetromino>,
    /// Landing row of `active`.
    pub ghost_y: Option<i32>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub status: GameStatus,
    pub drop_interval_ms: u32,
}

impl GameSnapshot<'_> {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// The falling piece moved down to its ghost row.
    pub fn ghost(&self) -> Option<Tetromino> {
        let active = self.active?;
        let y = self.ghost_y?;
        Some(Tetromino { y, ..active })
    }

    /// Cheap hash of everything visible, for render throttling.
    pub fn fingerprint(&self) -> u64 {
        // FNV-1a
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut h = OFFSET;
        let mut feed = |v: u64| {
            for b in v.to_le_bytes() {
                h ^= b as u64;
                h = h.wrapping_mul(PRIME);
            }
        };

        for (i, cell) in self.board.rows().flatten().enumerate() {
            if let Some(c) = cell {
                feed(i as u64);
                feed(((c.r as u64) << 16) | ((c.g as u64) << 8) | c.b as u64);
            }
        }
        if let Some(p) = self.active {
            feed(p.kind as u64);
            feed(p.x as u64);
            feed(p.y as u64);
            for (x, y) in p.cells() {
                feed(((x as u64) << 32) ^ y as u64);
            }
        }
        feed(self.next as u64);
        feed(self.score as u64);
        feed(self.lines as u64);
        feed(self.level as u64);
        feed(self.status as u64);
        h
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::GameState;

    #[test]
    fn fingerprint_tracks_piece_movement() {
        let mut state = GameState::new(5);
        let before = state.snapshot().fingerprint();
        assert_eq!(before, state.snapshot().fingerprint());

        assert!(state.move_piece(1));
        assert_ne!(before, state.snapshot().fingerprint());
    }

    #[test]
    fn fingerprint_tracks_pause() {
        let mut state = GameState::new(5);
        let before = state.snapshot().fingerprint();
        state.toggle_pause();
        assert_ne!(before, state.snapshot().fingerprint());
    }

    #[test]
    fn ghost_sits_on_landing_row() {
        let state = GameState::new(5);
        let snap = state.snapshot();
        let ghost = snap.ghost().unwrap();
        assert_eq!(Some(ghost.y), snap.ghost_y);
        assert_eq!(ghost.x, snap.active.unwrap().x);
    }
}
