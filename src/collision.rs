//! Laser-versus-target resolution for a single tick.
//!
//! Runs after everything has moved and before retirement.  Hits only flip
//! active flags; nothing is removed here.

use crate::entities::{Alien, Laser, Ship};
use crate::geometry::intersects;

/// What a resolution pass did.  The caller turns this into score and lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub aliens_destroyed: u32,
    /// Capped at 1: the ship loses at most one life per tick.
    pub ship_hits: u32,
}

/// Resolve both laser collections against their targets.
pub fn resolve(
    ship: &Ship,
    aliens: &mut [Alien],
    player_lasers: &mut [Laser],
    alien_lasers: &mut [Laser],
    screen_height: f32,
) -> CollisionReport {
    CollisionReport {
        aliens_destroyed: resolve_player_lasers(player_lasers, aliens),
        ship_hits: resolve_alien_lasers(alien_lasers, ship, screen_height),
    }
}

/// Each active laser destroys at most the first active alien it overlaps.
/// Lasers that scrolled off the top are spent.
pub fn resolve_player_lasers(lasers: &mut [Laser], aliens: &mut [Alien]) -> u32 {
    let mut destroyed = 0;

    for laser in lasers.iter_mut().filter(|l| l.active) {
        if laser.y < 0.0 {
            laser.active = false;
            continue;
        }

        if let Some(alien) = aliens
            .iter_mut()
            .find(|a| a.active && intersects(&*laser, &**a))
        {
            alien.active = false;
            laser.active = false;
            destroyed += 1;
        }
    }

    destroyed
}

/// The first overlapping alien laser costs the ship a life.  Any further
/// overlapping lasers stay live and are judged again next tick; lasers below
/// the screen are spent either way.
pub fn resolve_alien_lasers(lasers: &mut [Laser], ship: &Ship, screen_height: f32) -> u32 {
    let mut hits = 0;

    for laser in lasers.iter_mut().filter(|l| l.active) {
        if laser.y > screen_height {
            laser.active = false;
            continue;
        }

        if hits == 0 && intersects(&*laser, ship) {
            laser.active = false;
            hits = 1;
        }
    }

    hits
}
