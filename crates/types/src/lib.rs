//! Shared types and rule constants.
//!
//! Everything here is plain data with no dependencies, usable by the engine,
//! the terminal view and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: matrix origin at (3, 0) for every piece
//!
//! # Gravity
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `LEVEL_DROP_STEP_MS` | 75 | Interval reduction per level |
//! | `DROP_INTERVAL_FLOOR_MS` | 90 | Fastest level gravity |
//! | `SOFT_DROP_INTERVAL_MS` | 50 | Gravity while soft drop is held |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color().to_hex(), "#c77dff");
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Column of the matrix origin of a freshly spawned piece.
pub const SPAWN_X: i32 = 3;

/// Row of the matrix origin of a freshly spawned piece.
pub const SPAWN_Y: i32 = 0;

/// Default frame pacing for the host loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level gained.
pub const LEVEL_DROP_STEP_MS: u32 = 75;

/// Gravity never gets faster than this, whatever the level.
pub const DROP_INTERVAL_FLOOR_MS: u32 = 90;

/// Gravity interval while soft drop is held.
pub const SOFT_DROP_INTERVAL_MS: u32 = 50;

/// How long soft drop stays active after the last Down press on terminals
/// that never report key releases.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for clearing 0..=4 lines in one lock, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal corrections tried after a rotation, in order.
pub const KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];

/// Volume step for the volume up/down keys.
pub const VOLUME_STEP: f32 = 0.1;

/// Music volume when nothing else is configured.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    ///
    /// ```
    /// use term_tetris_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff7675"), Some(Rgb::new(255, 118, 117)));
    /// assert_eq!(Rgb::from_hex("nope"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend towards `other`; `amount` 0.0 keeps `self`, 1.0 yields `other`.
    pub fn mix(self, other: Rgb, amount: f32) -> Rgb {
        let t = amount.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order a fresh bag is filled before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color of the kind.
    pub const fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x60, 0xd7, 0xfb),
            PieceKind::O => Rgb::new(0xf9, 0xdf, 0x6d),
            PieceKind::T => Rgb::new(0xc7, 0x7d, 0xff),
            PieceKind::S => Rgb::new(0x55, 0xef, 0xc4),
            PieceKind::Z => Rgb::new(0xff, 0x76, 0x75),
            PieceKind::J => Rgb::new(0x74, 0xb9, 0xff),
            PieceKind::L => Rgb::new(0xfd, 0xcb, 0x6e),
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Switch gravity to the soft drop interval
    SoftDropStart,
    /// Restore the level gravity interval
    SoftDropStop,
    /// Drop and lock the piece in a single step
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a new session from any state
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use term_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdropstart"), Some(GameAction::SoftDropStart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "softdropstart" => Some(GameAction::SoftDropStart),
            "softdropstop" => Some(GameAction::SoftDropStop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::SoftDropStart => "softDropStart",
            GameAction::SoftDropStop => "softDropStop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board: empty, or the color of the piece locked there.
pub type Cell = Option<Rgb>;
