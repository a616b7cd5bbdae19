//! The alien formation: layout, lockstep sweep with descent at the screen
//! margins, respawn when wiped out, and cooldown-gated random fire.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::config::Config;
use crate::entities::{Alien, AlienKind, Laser, Metrics, Size};
use crate::geometry::Bounds;

#[derive(Clone, Debug)]
pub struct Fleet {
    /// Row-major spawn order.  Firing picks by index into the live subset,
    /// so the order must stay stable between retirements.
    pub aliens: Vec<Alien>,
    /// +1.0 sweeping right, -1.0 sweeping left.
    pub direction: f32,
    pub speed: f32,
    pub last_shot: Option<Instant>,
    pub cooldown: Duration,
}

impl Fleet {
    /// An empty fleet sweeping right.  Call [`Fleet::spawn`] to populate it.
    pub fn new(config: &Config) -> Self {
        Self {
            aliens: Vec::with_capacity(config.fleet_rows * config.fleet_columns),
            direction: 1.0,
            speed: config.fleet_speed,
            last_shot: None,
            cooldown: config.alien_fire_cooldown,
        }
    }

    /// Append a full formation.  Row 0 is the top row.
    pub fn spawn(&mut self, config: &Config, metrics: &Metrics) {
        for row in 0..config.fleet_rows {
            let kind = AlienKind::for_row(row);
            for column in 0..config.fleet_columns {
                self.aliens.push(Alien {
                    kind,
                    x: config.fleet_origin_x + column as f32 * config.fleet_spacing,
                    y: config.fleet_origin_y + row as f32 * config.fleet_spacing,
                    size: metrics.alien(kind),
                    active: true,
                });
            }
        }
        debug!(aliens = self.aliens.len(), "fleet spawned");
    }

    /// Number of aliens still eligible for collision and fire.
    pub fn live_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Move the whole formation one step.
    ///
    /// The turn decision is made over the entire fleet before anything moves:
    /// if any alien is past the margin it is heading towards, the direction
    /// flips and every alien descends once.  Then every alien moves
    /// horizontally by the (possibly flipped) velocity.
    pub fn advance(&mut self, config: &Config) {
        let right_limit = config.screen_width - config.fleet_margin;
        let left_limit = config.fleet_margin;

        let at_edge = if self.direction > 0.0 {
            self.aliens.iter().any(|a| a.right() > right_limit)
        } else {
            self.aliens.iter().any(|a| a.x < left_limit)
        };

        let dy = if at_edge {
            self.direction = -self.direction;
            debug!(direction = self.direction, "fleet reached margin, turning");
            config.fleet_descent
        } else {
            0.0
        };

        let dx = self.direction * self.speed;
        for alien in &mut self.aliens {
            alien.shift(dx, dy);
        }
    }

    /// Fire one laser from a uniformly chosen live alien, unless the
    /// cooldown has not elapsed or nobody is left to shoot.
    pub fn try_fire(
        &mut self,
        now: Instant,
        laser_size: Size,
        rng: &mut impl Rng,
    ) -> Option<Laser> {
        if let Some(last) = self.last_shot {
            if now.saturating_duration_since(last) < self.cooldown {
                return None;
            }
        }

        let live: Vec<&Alien> = self.aliens.iter().filter(|a| a.active).collect();
        let shooter = live.choose(rng)?;

        let laser = Laser::new(
            shooter.x + (shooter.size.w - laser_size.w) / 2.0,
            shooter.bottom(),
            laser_size,
        );
        trace!(x = laser.x, y = laser.y, kind = ?shooter.kind, "alien fired");

        self.last_shot = Some(now);
        Some(laser)
    }

    /// Drop aliens that were destroyed this tick, keeping spawn order.
    pub fn retire(&mut self) {
        self.aliens.retain(|a| a.active);
    }
}
