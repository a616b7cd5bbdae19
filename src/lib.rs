//! Space Invaders: a fixed-step simulation core plus the terminal
//! collaborators (assets, input, rendering) that drive it.

pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod fleet;
pub mod geometry;
pub mod input;
pub mod projectiles;
