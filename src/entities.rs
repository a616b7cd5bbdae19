//! Game entity types: plain data plus the movement primitives they own.

use crate::geometry::Bounds;

/// Logical width and height of a sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Logical sprite sizes the simulation needs for collisions and spawning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub ship: Size,
    /// Indexed by `AlienKind::index`.
    pub aliens: [Size; 3],
}

impl Metrics {
    pub fn alien(&self, kind: AlienKind) -> Size {
        self.aliens[kind.index()]
    }
}

/// Alien type.  Only the sprite depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlienKind {
    /// Type 0, bottom two rows.
    Octopus,
    /// Type 1, middle two rows.
    Crab,
    /// Type 2, top row.
    Squid,
}

impl AlienKind {
    pub const ALL: [AlienKind; 3] = [AlienKind::Octopus, AlienKind::Crab, AlienKind::Squid];

    /// Kind assigned to every alien spawned in `row` (0 is the top row).
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => AlienKind::Squid,
            1 | 2 => AlienKind::Crab,
            _ => AlienKind::Octopus,
        }
    }

    /// Numeric type, 0..=2.
    pub fn index(self) -> usize {
        match self {
            AlienKind::Octopus => 0,
            AlienKind::Crab => 1,
            AlienKind::Squid => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Title,
    Playing,
    GameOver,
}

// ── Player ship ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub size: Size,
}

impl Ship {
    /// Move horizontally by `dir × speed`, staying inside `[0, max_x]`.
    pub fn steer(&mut self, dir: f32, screen_width: f32) {
        let max_x = (screen_width - self.size.w).max(0.0);
        self.x = (self.x + dir * self.speed).clamp(0.0, max_x);
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.size.w / 2.0
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub kind: AlienKind,
    pub x: f32,
    pub y: f32,
    pub size: Size,
    pub active: bool,
}

impl Alien {
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

// ── Lasers ────────────────────────────────────────────────────────────────────

/// A projectile.  Player and alien lasers share this shape but live in
/// separate collections.
#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    pub size: Size,
    pub active: bool,
}

impl Laser {
    pub fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            x,
            y,
            size,
            active: true,
        }
    }
}

// ── Bounds impls ──────────────────────────────────────────────────────────────

macro_rules! impl_bounds {
    ($($ty:ty),*) => {
        $(
            impl Bounds for $ty {
                fn x(&self) -> f32 {
                    self.x
                }
                fn y(&self) -> f32 {
                    self.y
                }
                fn width(&self) -> f32 {
                    self.size.w
                }
                fn height(&self) -> f32 {
                    self.size.h
                }
            }
        )*
    };
}

impl_bounds!(Ship, Alien, Laser);
