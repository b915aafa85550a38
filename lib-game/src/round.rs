use std::fmt::Write;

use log::{debug, info, trace};
use macroquad::prelude::*;

use crate::config::GameCfg;
use crate::input::InputModel;
use crate::mode::GameMode;
use crate::player::PlayerState;
use crate::powerup::{PowerUp, PowerUpKind};
use crate::rng::GameRng;
use crate::shape::{Shape, ShapeKind};
use crate::spawner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    GameOver,
    TimeUp,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::Playing)
    }

    /// The headline of the final score overlay.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            RoundState::Playing => None,
            RoundState::GameOver => Some("GAME OVER"),
            RoundState::TimeUp => Some("TIME UP!"),
        }
    }
}

/// Things that happened during the last update. The presentation
/// layer turns these into sounds and particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundEvent {
    GoodHit { pos: Vec2 },
    BadHit { pos: Vec2 },
    Exploded { pos: Vec2 },
    PowerUpCollected { pos: Vec2, kind: PowerUpKind },
    Ended(RoundState),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Continue,
    /// The player asked to go back to mode selection.
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundClock {
    pub elapsed: f32,
    pub spawn_timer: f32,
    pub powerup_timer: f32,
    /// Time left in the timed mode. Zero in every other mode.
    pub countdown: f32,
}

impl RoundClock {
    pub fn new(countdown: Option<f32>) -> Self {
        Self {
            elapsed: 0.0,
            spawn_timer: 0.0,
            powerup_timer: 0.0,
            countdown: countdown.unwrap_or(0.0),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.countdown = (self.countdown - dt).max(0.0);
    }
}

/// One play-through, from mode selection to the terminal overlay.
pub struct Round {
    mode: GameMode,
    cfg: GameCfg,
    bounds: Rect,
    rng: GameRng,
    state: RoundState,
    events: Vec<RoundEvent>,
    pub player: PlayerState,
    pub clock: RoundClock,
    pub shapes: Vec<Shape>,
    pub powerups: Vec<PowerUp>,
}

impl Round {
    pub fn new(mode: GameMode, cfg: GameCfg, bounds: Rect, seed: u64) -> Self {
        let mut round = Self::empty(mode, cfg, bounds, seed);
        for _ in 0..cfg.spawn.initial_shapes {
            round.spawn_shape();
        }

        info!("Round started: mode={}, seed={seed}", mode.name());

        round
    }

    /// A round with nothing spawned yet.
    pub fn empty(mode: GameMode, cfg: GameCfg, bounds: Rect, seed: u64) -> Self {
        Self {
            mode,
            cfg,
            bounds,
            rng: GameRng::new(seed),
            state: RoundState::Playing,
            events: Vec::new(),
            player: PlayerState::new(mode.starting_lives(&cfg)),
            clock: RoundClock::new(mode.countdown(&cfg)),
            shapes: Vec::new(),
            powerups: Vec::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Events produced by the most recent [Round::update].
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Advances the round by one frame.
    pub fn update(&mut self, dt: f32, input: &InputModel) -> RoundOutcome {
        self.events.clear();

        if input.exit_requested {
            return RoundOutcome::Exit;
        }

        if self.state.is_terminal() {
            return RoundOutcome::Continue;
        }

        self.clock.advance(dt);
        self.player.update_buffs(dt);

        if let Some(point) = input.click {
            self.resolve_click(point);
        }

        self.run_spawners(dt);

        let frozen = self.player.frozen();
        for shape in self.shapes.iter_mut() {
            shape.tick(dt, frozen);
        }

        self.purge();
        self.check_end();

        RoundOutcome::Continue
    }

    /// Resolves a click at `point`. Power-ups have priority, then the
    /// topmost alive shape. At most one entity is affected.
    pub fn resolve_click(&mut self, point: Vec2) -> bool {
        if let Some(powerup) = self
            .powerups
            .iter_mut()
            .find(|pu| pu.alive && pu.hit_test(point))
        {
            powerup.alive = false;
            self.player.apply_powerup(powerup);
            debug!("Collected {:?}", powerup.kind);
            self.events.push(RoundEvent::PowerUpCollected {
                pos: powerup.pos,
                kind: powerup.kind,
            });
            return true;
        }

        let Some(shape) = self
            .shapes
            .iter_mut()
            .rev()
            .find(|shape| shape.alive && shape.hit_test(point))
        else {
            return false;
        };

        shape.alive = false;
        let (kind, pos) = (shape.kind, shape.pos);
        debug!("Clicked {kind:?} at {pos}");

        let score = &self.cfg.score;
        match kind {
            ShapeKind::Good => {
                self.player.score += if self.player.doubled() {
                    score.good_doubled
                } else {
                    score.good
                };
                self.events.push(RoundEvent::GoodHit { pos });
            }
            ShapeKind::Bad => {
                self.player.score -= score.bad_penalty;
                self.player.lives -= 1;
                self.events.push(RoundEvent::BadHit { pos });
            }
            ShapeKind::Exploder => {
                self.player.score += score.exploder;
                self.shapes
                    .extend(spawner::spawn_fragments(&mut self.rng, pos, &self.cfg));
                self.events.push(RoundEvent::Exploded { pos });
                self.events.push(RoundEvent::GoodHit { pos });
            }
        }

        true
    }

    fn run_spawners(&mut self, dt: f32) {
        self.clock.spawn_timer += dt;
        let interval = spawner::shape_interval(self.clock.elapsed, self.mode, &self.cfg);
        if self.clock.spawn_timer >= interval {
            self.clock.spawn_timer = 0.0;
            self.spawn_shape();
        }

        self.clock.powerup_timer += dt;
        if self.clock.powerup_timer >= self.cfg.spawn.powerup_interval {
            self.clock.powerup_timer = 0.0;
            let powerup = spawner::spawn_powerup(&mut self.rng, self.bounds, &self.cfg);
            debug!("Spawned {:?} at {}", powerup.kind, powerup.pos);
            self.powerups.push(powerup);
        }
    }

    fn spawn_shape(&mut self) {
        let shape = spawner::spawn_shape(
            &mut self.rng,
            self.bounds,
            self.clock.elapsed,
            self.mode,
            &self.cfg,
        );
        trace!("Spawned {:?} at {}", shape.kind, shape.pos);
        self.shapes.push(shape);
    }

    fn purge(&mut self) {
        let bounds = self.bounds;
        let margin = self.cfg.bounds.despawn_margin;

        self.shapes
            .retain(|shape| shape.alive && !shape.out_of_bounds(bounds, margin));
        self.powerups.retain(|pu| pu.alive);
    }

    fn check_end(&mut self) {
        let next = if self.mode.lives_matter() && self.player.lives <= 0 {
            RoundState::GameOver
        } else if self.mode.countdown(&self.cfg).is_some() && self.clock.countdown <= 0.0 {
            RoundState::TimeUp
        } else {
            return;
        };

        info!(
            "Round over ({next:?}): mode={}, score={}",
            self.mode.name(),
            self.player.score
        );
        self.state = next;
        self.events.push(RoundEvent::Ended(next));
    }

    /// Whole seconds left on the countdown, rounded up. Never negative.
    pub fn countdown_secs(&self) -> u32 {
        self.clock.countdown.max(0.0).ceil() as u32
    }

    pub fn hud_text(&self) -> String {
        let mut hud = format!(
            "Score: {}   Lives: {}",
            self.player.score, self.player.lives
        );

        // Writing into a String can't fail
        if self.mode.countdown(&self.cfg).is_some() {
            let _ = write!(hud, "   Time: {}", self.countdown_secs());
        }
        if self.player.frozen() {
            let _ = write!(hud, "   Freeze: {:.1}", self.player.freeze_remaining);
        }
        if self.player.doubled() {
            let _ = write!(hud, "   2x: {:.1}", self.player.double_remaining);
        }

        hud
    }

    pub fn final_score_text(&self) -> String {
        format!("Score: {}   Press ESC", self.player.score)
    }
}
