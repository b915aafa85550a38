use crate::powerup::{PowerUp, PowerUpKind};

/// Score, lives and the timed buffs of one round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    pub score: i32,
    pub lives: i32,
    pub freeze_remaining: f32,
    pub double_remaining: f32,
}

impl PlayerState {
    pub fn new(lives: i32) -> Self {
        Self {
            score: 0,
            lives,
            freeze_remaining: 0.0,
            double_remaining: 0.0,
        }
    }

    pub fn frozen(&self) -> bool {
        self.freeze_remaining > 0.0
    }

    pub fn doubled(&self) -> bool {
        self.double_remaining > 0.0
    }

    pub fn update_buffs(&mut self, dt: f32) {
        self.freeze_remaining = (self.freeze_remaining - dt).max(0.0);
        self.double_remaining = (self.double_remaining - dt).max(0.0);
    }

    /// Applies the effect of a collected power-up. Timed buffs
    /// are only ever extended, never shortened.
    pub fn apply_powerup(&mut self, powerup: &PowerUp) {
        match powerup.kind {
            PowerUpKind::Freeze => {
                self.freeze_remaining = self.freeze_remaining.max(powerup.duration)
            }
            PowerUpKind::Double => {
                self.double_remaining = self.double_remaining.max(powerup.duration)
            }
            PowerUpKind::ExtraLife => self.lives += 1,
        }
    }
}
