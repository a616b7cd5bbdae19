//! Player and alien lasers: spawning, movement and retirement.

use crate::config::Config;
use crate::entities::{Laser, Ship, Size};

#[derive(Clone, Debug)]
pub struct Projectiles {
    /// Fired by the ship; travel up.
    pub player: Vec<Laser>,
    /// Fired by the fleet; travel down.
    pub alien: Vec<Laser>,
    pub speed: f32,
    pub laser_size: Size,
}

impl Projectiles {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Vec::new(),
            alien: Vec::new(),
            speed: config.laser_speed,
            laser_size: Size::new(config.laser_width, config.laser_height),
        }
    }

    /// Spawn one laser centred on the ship, just above its top edge.
    pub fn fire_from_ship(&mut self, ship: &Ship) {
        let x = ship.center_x() - self.laser_size.w / 2.0;
        let y = ship.y - 2.0;
        self.player.push(Laser::new(x, y, self.laser_size));
    }

    pub fn advance(&mut self) {
        for laser in &mut self.player {
            laser.y -= self.speed;
        }
        for laser in &mut self.alien {
            laser.y += self.speed;
        }
    }

    /// Drop every inactive laser, keeping the relative order of the rest.
    pub fn retire(&mut self) {
        self.player.retain(|l| l.active);
        self.alien.retain(|l| l.active);
    }
}
