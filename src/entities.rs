//! All game entity types: pure data, no logic beyond geometry helpers.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in field pixels, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The only projectile in play. While `active` is false its position is stale.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub active: bool,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub bullet: Bullet,
    /// Current wave in generation (row-major) order.
    pub aliens: Vec<Alien>,
    /// Formation velocity shared by every alien; sign is the direction.
    pub velocity: i32,
    pub score: u32,
    /// Grows by one on every cleared wave.
    pub columns: u32,
    pub rows: u32,
    pub status: GameStatus,
    /// Frames simulated since the last (re)start.
    pub frame: u64,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
