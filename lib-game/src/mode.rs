use crate::config::GameCfg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Normal,
    Timed,
    Endless,
    Hardcore,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Normal => "Normal",
            GameMode::Timed => "Timed",
            GameMode::Endless => "Endless",
            GameMode::Hardcore => "Hardcore",
        }
    }

    pub fn starting_lives(self, cfg: &GameCfg) -> i32 {
        match self {
            GameMode::Hardcore => cfg.modes.hardcore_lives,
            _ => cfg.modes.lives,
        }
    }

    /// The length of the round countdown. Only the timed mode has one.
    pub fn countdown(self, cfg: &GameCfg) -> Option<f32> {
        match self {
            GameMode::Timed => Some(cfg.modes.timed_duration),
            _ => None,
        }
    }

    /// Whether running out of lives ends the round.
    pub fn lives_matter(self) -> bool {
        matches!(self, GameMode::Normal | GameMode::Hardcore)
    }

    pub fn spawn_interval_scale(self, cfg: &GameCfg) -> f32 {
        match self {
            GameMode::Hardcore => cfg.modes.hardcore_interval_scale,
            GameMode::Endless => cfg.modes.endless_interval_scale,
            _ => 1.0,
        }
    }

    pub fn speed_scale(self, cfg: &GameCfg) -> f32 {
        match self {
            GameMode::Hardcore => cfg.modes.hardcore_speed_scale,
            GameMode::Endless => cfg.modes.endless_speed_scale,
            _ => 1.0,
        }
    }
}
