use macroquad::prelude::*;

use crate::config::GameCfg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Freeze,
    Double,
    ExtraLife,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Freeze,
        PowerUpKind::Double,
        PowerUpKind::ExtraLife,
    ];

    /// How long the buff lasts once collected. Zero for instant effects.
    pub fn duration(self, cfg: &GameCfg) -> f32 {
        match self {
            PowerUpKind::Freeze => cfg.powerup.freeze_duration,
            PowerUpKind::Double => cfg.powerup.double_duration,
            PowerUpKind::ExtraLife => 0.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Freeze => BLUE,
            PowerUpKind::Double => Color::from_rgba(200, 180, 60, 255),
            PowerUpKind::ExtraLife => Color::from_rgba(200, 100, 220, 255),
        }
    }
}

/// A stationary pickup.
#[derive(Clone, Copy, Debug)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub duration: f32,
    pub radius: f32,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind, cfg: &GameCfg) -> Self {
        Self {
            pos,
            kind,
            duration: kind.duration(cfg),
            radius: cfg.powerup.radius,
            alive: true,
        }
    }

    pub fn hit_test(&self, point: Vec2) -> bool {
        point.distance_squared(self.pos) <= self.radius * self.radius
    }
}
