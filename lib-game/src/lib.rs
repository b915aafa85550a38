//! Gameplay of Shape Wars. Nothing in here needs a window, so
//! everything can be driven from tests.
//!
//! A frame of the game goes like this:
//! 1. The binary captures an [InputModel]
//! 2. [Round::update] advances clocks and buffs, resolves the click,
//!    runs the spawners, moves the shapes and purges the dead ones
//! 3. The binary reads [Round::events] to play sounds and particles
//! 4. The binary draws the round

mod config;
mod input;
mod mode;
mod player;
mod powerup;
mod rng;
mod round;
mod shape;
mod spawner;

pub use config::*;
pub use input::*;
pub use mode::*;
pub use player::*;
pub use powerup::*;
pub use rng::*;
pub use round::*;
pub use shape::*;
