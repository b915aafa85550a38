use lib_game::{Round, RoundEvent, ShapeKind};
use macroquad::prelude::*;
use macroquad_particles::{self as particles, BlendMode, ColorCurve, EmitterConfig};

const HIT_PARTICLES: usize = 12;
const EXPLOSION_PARTICLES: usize = 40;

fn burst() -> particles::EmitterConfig {
    particles::EmitterConfig {
        local_coords: false,
        one_shot: true,
        emitting: false,
        lifetime: 0.4,
        lifetime_randomness: 0.7,
        explosiveness: 0.99,
        amount: EXPLOSION_PARTICLES as u32,
        initial_direction_spread: 2.0 * std::f32::consts::PI,
        initial_velocity: 160.0,
        size: 3.0,
        blend_mode: BlendMode::Alpha,
        ..Default::default()
    }
}

fn tinted(color: Color) -> EmitterConfig {
    EmitterConfig {
        colors_curve: ColorCurve {
            start: color,
            mid: color,
            end: BLANK,
        },
        ..burst()
    }
}

/// The slowly drifting background color at time `t`.
pub fn background_color(t: f32) -> Color {
    Color::from_rgba(
        (28.0 + 20.0 * (t * 0.25).sin()) as u8,
        (28.0 + 12.0 * (t * 0.3 + 1.0).sin()) as u8,
        (40.0 + 16.0 * (t * 0.2 + 2.0).sin()) as u8,
        255,
    )
}

pub struct Render {
    bg_time: f32,
    good_emit: particles::Emitter,
    bad_emit: particles::Emitter,
    exploder_emit: particles::Emitter,
}

impl Render {
    pub fn new() -> Self {
        Self {
            bg_time: 0.0,
            good_emit: particles::Emitter::new(tinted(ShapeKind::Good.color())),
            bad_emit: particles::Emitter::new(tinted(ShapeKind::Bad.color())),
            exploder_emit: particles::Emitter::new(tinted(ShapeKind::Exploder.color())),
        }
    }

    /// Starts a new round: the background cycle restarts too.
    pub fn reset(&mut self) {
        self.bg_time = 0.0;
    }

    pub fn draw(&mut self, round: &Round, dt: f32) {
        self.spawn_particles(round.events());

        if !round.state().is_terminal() {
            self.bg_time += dt;
        }
        clear_background(background_color(self.bg_time));

        for shape in &round.shapes {
            draw_circle(shape.pos.x, shape.pos.y, shape.radius, shape.kind.color());
        }
        for powerup in &round.powerups {
            draw_circle(powerup.pos.x, powerup.pos.y, powerup.radius, powerup.kind.color());
        }

        self.good_emit.draw(Vec2::ZERO);
        self.bad_emit.draw(Vec2::ZERO);
        self.exploder_emit.draw(Vec2::ZERO);
    }

    fn spawn_particles(&mut self, events: &[RoundEvent]) {
        for event in events {
            match *event {
                RoundEvent::GoodHit { pos } => self.good_emit.emit(pos, HIT_PARTICLES),
                RoundEvent::BadHit { pos } => self.bad_emit.emit(pos, HIT_PARTICLES),
                RoundEvent::Exploded { pos } => self.exploder_emit.emit(pos, EXPLOSION_PARTICLES),
                RoundEvent::PowerUpCollected { .. } | RoundEvent::Ended(_) => (),
            }
        }
    }
}
