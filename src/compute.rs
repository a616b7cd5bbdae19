//! The game state machine.
//!
//! `Game` owns every entity.  `update` is called once per frame with that
//! frame's intents; while playing it runs one full tick in a fixed order:
//! ship, fleet, lasers, collisions, retirement, respawn, alien fire, and the
//! lives check.  All randomness comes through the injected `rng` and all time
//! through `now`, so a seeded RNG and a synthetic clock give a replayable run.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::collision::{self, CollisionReport};
use crate::config::Config;
use crate::entities::{AlienKind, GameStatus, Metrics, Ship};
use crate::fleet::Fleet;
use crate::projectiles::Projectiles;

/// Input summary for one tick.  `left`/`right` are held state; `fire`,
/// `start` and `quit` are true only on the tick the key went down.
/// `start` is Enter; fire is Space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub start: bool,
    pub quit: bool,
}

/// What the host loop should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Read-only copy of everything the renderer draws.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub ship: (f32, f32),
    /// Live aliens only.
    pub aliens: Vec<(AlienKind, f32, f32)>,
    pub player_lasers: Vec<(f32, f32)>,
    pub alien_lasers: Vec<(f32, f32)>,
    pub score: u32,
    pub lives: i32,
    pub status: GameStatus,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub config: Config,
    pub metrics: Metrics,
    pub ship: Ship,
    pub fleet: Fleet,
    pub projectiles: Projectiles,
    pub score: u32,
    pub lives: i32,
    pub status: GameStatus,
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl Game {
    /// A fresh round, already playing.
    pub fn new(config: Config, metrics: Metrics) -> Self {
        let mut fleet = Fleet::new(&config);
        fleet.spawn(&config, &metrics);

        Self {
            ship: spawn_ship(&config, &metrics),
            projectiles: Projectiles::new(&config),
            fleet,
            score: 0,
            lives: config.starting_lives,
            status: GameStatus::Playing,
            config,
            metrics,
        }
    }

    /// A fresh round waiting on the title screen for a start press.
    pub fn on_title_screen(config: Config, metrics: Metrics) -> Self {
        Self {
            status: GameStatus::Title,
            ..Self::new(config, metrics)
        }
    }

    /// Throw the current round away and return to the title screen.
    pub fn reset(&mut self) {
        *self = Self::on_title_screen(self.config.clone(), self.metrics);
    }
}

fn spawn_ship(config: &Config, metrics: &Metrics) -> Ship {
    Ship {
        x: (config.screen_width - metrics.ship.w) / 2.0,
        y: config.screen_height - metrics.ship.h - config.ship_bottom_offset,
        speed: config.ship_speed,
        size: metrics.ship,
    }
}

// ── Per-frame update ─────────────────────────────────────────────────────────

impl Game {
    /// Apply one frame of input.  Quit wins in every state.  Fire or start
    /// leaves the title screen; only start leaves the game-over screen.
    pub fn update(&mut self, intents: &Intents, now: Instant, rng: &mut impl Rng) -> Flow {
        if intents.quit {
            info!(score = self.score, "quit requested");
            return Flow::Stop;
        }

        match self.status {
            GameStatus::Title => {
                if intents.start || intents.fire {
                    info!("round started");
                    self.status = GameStatus::Playing;
                }
            }
            GameStatus::Playing => self.tick(intents, now, rng),
            GameStatus::GameOver => {
                if intents.start {
                    self.reset();
                }
            }
        }

        Flow::Continue
    }

    /// Advance the simulation by one step.  Does nothing unless playing.
    pub fn tick(&mut self, intents: &Intents, now: Instant, rng: &mut impl Rng) {
        if self.status != GameStatus::Playing {
            return;
        }

        // 1. Ship
        let dir = match (intents.left, intents.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        self.ship.steer(dir, self.config.screen_width);

        if intents.fire {
            self.projectiles.fire_from_ship(&self.ship);
        }

        // 2. Movement
        self.fleet.advance(&self.config);
        self.projectiles.advance();

        // 3. Collisions, then retirement
        let report = collision::resolve(
            &self.ship,
            &mut self.fleet.aliens,
            &mut self.projectiles.player,
            &mut self.projectiles.alien,
            self.config.screen_height,
        );
        self.apply(report);

        self.fleet.retire();
        self.projectiles.retire();

        // 4. Respawn and return fire
        if self.fleet.is_empty() {
            debug!(score = self.score, "fleet cleared");
            self.fleet.spawn(&self.config, &self.metrics);
        }

        if let Some(laser) = self.fleet.try_fire(now, self.projectiles.laser_size, rng) {
            self.projectiles.alien.push(laser);
        }

        // 5. Lives
        if self.lives <= 0 {
            info!(score = self.score, "game over");
            self.status = GameStatus::GameOver;
        }
    }

    fn apply(&mut self, report: CollisionReport) {
        self.score += report.aliens_destroyed;
        if report.ship_hits > 0 {
            self.lives -= report.ship_hits as i32;
            info!(lives = self.lives, "ship hit");
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: (self.ship.x, self.ship.y),
            aliens: self
                .fleet
                .aliens
                .iter()
                .filter(|a| a.active)
                .map(|a| (a.kind, a.x, a.y))
                .collect(),
            player_lasers: self.projectiles.player.iter().map(|l| (l.x, l.y)).collect(),
            alien_lasers: self.projectiles.alien.iter().map(|l| (l.x, l.y)).collect(),
            score: self.score,
            lives: self.lives,
            status: self.status,
        }
    }
}
