use lib_game::RoundEvent;
use log::warn;
use macroquad::audio::{Sound, load_sound, play_sound_once};

/// Plays the sound effects of a round. Every clip is optional: one
/// that failed to load is just skipped.
pub struct SoundDirector {
    good_hit: Option<Sound>,
    bad_hit: Option<Sound>,
    powerup: Option<Sound>,
}

impl SoundDirector {
    pub async fn new() -> Self {
        Self {
            good_hit: load_optional("assets/click.wav").await,
            bad_hit: load_optional("assets/error.wav").await,
            powerup: load_optional("assets/powerup.wav").await,
        }
    }

    pub fn direct_sounds(&self, events: &[RoundEvent]) {
        for event in events {
            let sound = match event {
                RoundEvent::GoodHit { .. } => &self.good_hit,
                RoundEvent::BadHit { .. } => &self.bad_hit,
                RoundEvent::PowerUpCollected { .. } => &self.powerup,
                RoundEvent::Exploded { .. } | RoundEvent::Ended(_) => continue,
            };

            if let Some(sound) = sound {
                play_sound_once(sound);
            }
        }
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("Sound {path:?} is disabled: {e}");
            None
        }
    }
}
