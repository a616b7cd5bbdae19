//! Layout and gameplay constants, plus the command-line overrides the
//! binary accepts.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

// ── Fixed layout ──────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 750.0;
pub const SCREEN_HEIGHT: f32 = 750.0;
pub const FONT_SIZE: f32 = 40.0;

pub const LASER_WIDTH: f32 = 5.0;
pub const LASER_HEIGHT: f32 = 10.0;

pub const FLEET_ROWS: usize = 5;
pub const FLEET_COLUMNS: usize = 11;
pub const FLEET_SPACING: f32 = 55.0;
pub const FLEET_ORIGIN_X: f32 = 100.0;
pub const FLEET_ORIGIN_Y: f32 = 50.0;

/// Distance from either side of the screen at which the fleet turns around.
pub const FLEET_MARGIN: f32 = 25.0;
pub const FLEET_DESCENT: f32 = 5.0;
pub const FLEET_SPEED: f32 = 1.0;
pub const ALIEN_FIRE_COOLDOWN: Duration = Duration::from_millis(800);

pub const SHIP_SPEED: f32 = 5.0;
/// Gap between the bottom of the ship sprite and the bottom of the screen.
pub const SHIP_BOTTOM_OFFSET: f32 = 50.0;
pub const LASER_SPEED: f32 = 5.0;
pub const STARTING_LIVES: i32 = 3;
pub const MAX_LIVES: i32 = 99;

pub const DEFAULT_FPS: u32 = 60;

/// Every tunable the simulation reads.  `Default` gives the arcade layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub font_size: f32,
    pub laser_width: f32,
    pub laser_height: f32,
    pub fleet_rows: usize,
    pub fleet_columns: usize,
    pub fleet_spacing: f32,
    pub fleet_origin_x: f32,
    pub fleet_origin_y: f32,
    pub fleet_margin: f32,
    pub fleet_descent: f32,
    pub fleet_speed: f32,
    pub alien_fire_cooldown: Duration,
    pub ship_speed: f32,
    pub ship_bottom_offset: f32,
    pub laser_speed: f32,
    pub starting_lives: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            font_size: FONT_SIZE,
            laser_width: LASER_WIDTH,
            laser_height: LASER_HEIGHT,
            fleet_rows: FLEET_ROWS,
            fleet_columns: FLEET_COLUMNS,
            fleet_spacing: FLEET_SPACING,
            fleet_origin_x: FLEET_ORIGIN_X,
            fleet_origin_y: FLEET_ORIGIN_Y,
            fleet_margin: FLEET_MARGIN,
            fleet_descent: FLEET_DESCENT,
            fleet_speed: FLEET_SPEED,
            alien_fire_cooldown: ALIEN_FIRE_COOLDOWN,
            ship_speed: SHIP_SPEED,
            ship_bottom_offset: SHIP_BOTTOM_OFFSET,
            laser_speed: LASER_SPEED,
            starting_lives: STARTING_LIVES,
        }
    }
}

// ── Command line ──────────────────────────────────────────────────────────────

/// Terminal Space Invaders.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Simulation ticks per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Seed for the alien fire RNG (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lives at the start of each round (1 to 99).
    #[arg(
        long,
        default_value_t = STARTING_LIVES,
        value_parser = clap::value_parser!(i32).range(1..=MAX_LIVES as i64)
    )]
    pub lives: i32,

    /// Where tracing output goes; the terminal itself is the game screen.
    #[arg(long, default_value = "space_invaders.log")]
    pub log_file: PathBuf,
}

impl Args {
    /// Simulation config with the command-line overrides applied.
    pub fn to_config(&self) -> Config {
        Config {
            starting_lives: self.lives.clamp(1, MAX_LIVES),
            ..Config::default()
        }
    }

    /// Wall-clock length of one tick.
    pub fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
