use anyhow::Context;

macro_rules! game_cfg {
    (
        $( $section_name:ident : $section_ty:ident {
            $( $field_name:ident : $field_ty:ty = $default:expr ),+ $(,)?
        } ),*
        $(,)?
    ) => {
        /// All gameplay tunables. Every section falls back to its
        /// defaults field by field, so an override file only needs
        /// to name what it changes.
        #[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default)]
        pub struct GameCfg {
            $( pub $section_name : sections::$section_ty ),*
        }

        pub mod sections {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
                #[serde(default)]
                pub struct $section_ty {
                    $( pub $field_name : $field_ty ),+
                }

                impl Default for $section_ty {
                    fn default() -> Self {
                        Self {
                            $( $field_name : $default ),+
                        }
                    }
                }
            )*
        }
    };
}

game_cfg! {
    bounds: Bounds {
        despawn_margin: f32 = 100.0,
        spawn_offset: f32 = 20.0,
        powerup_inset: f32 = 50.0,
    },
    spawn: Spawn {
        base_interval: f32 = 0.8,
        min_interval: f32 = 0.12,
        interval_ramp: f32 = 0.005,
        powerup_interval: f32 = 12.0,
        min_speed: f32 = 60.0,
        max_speed: f32 = 140.0,
        speed_ramp: f32 = 2.0,
        min_size: f32 = 16.0,
        max_size: f32 = 34.0,
        good_threshold: i32 = 60,
        bad_threshold: i32 = 85,
        initial_shapes: u32 = 6,
    },
    exploder: Exploder {
        fragments: u32 = 4,
        min_speed: f32 = 80.0,
        max_speed: f32 = 180.0,
        min_radius: f32 = 5.0,
        max_radius: f32 = 10.0,
    },
    score: Score {
        good: i32 = 10,
        good_doubled: i32 = 20,
        bad_penalty: i32 = 6,
        exploder: i32 = 8,
    },
    powerup: PowerUps {
        radius: f32 = 12.0,
        freeze_duration: f32 = 3.0,
        double_duration: f32 = 6.0,
    },
    modes: Modes {
        lives: i32 = 3,
        hardcore_lives: i32 = 1,
        timed_duration: f32 = 60.0,
        hardcore_interval_scale: f32 = 0.5,
        endless_interval_scale: f32 = 0.9,
        hardcore_speed_scale: f32 = 1.5,
        endless_speed_scale: f32 = 1.2,
    },
}

/// Where the game looks for the optional override file.
pub const GAME_CFG_PATH: &str = "assets/shape_wars.ron";

impl GameCfg {
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        ron::from_str(src).context("parsing game config")
    }

    /// Reads the override file at `path`. A missing file is not an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_ron(&src).with_context(|| format!("in {path:?}")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("reading {path:?}")),
        }
    }

    /// Same as [GameCfg::load], but any failure is logged and
    /// replaced with the defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Falling back to default config: {e:#}");
                Self::default()
            }
        }
    }
}
