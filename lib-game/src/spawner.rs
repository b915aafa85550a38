use std::f32::consts::PI;

use macroquad::prelude::*;

use crate::config::GameCfg;
use crate::mode::GameMode;
use crate::powerup::{PowerUp, PowerUpKind};
use crate::rng::GameRng;
use crate::shape::{Shape, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Seconds between two shape spawns. Gets shorter as the round goes on.
pub fn shape_interval(elapsed: f32, mode: GameMode, cfg: &GameCfg) -> f32 {
    let spawn = &cfg.spawn;
    let interval = (spawn.base_interval - elapsed * spawn.interval_ramp).max(spawn.min_interval);

    interval * mode.spawn_interval_scale(cfg)
}

pub fn kind_from_roll(roll: i32, cfg: &GameCfg) -> ShapeKind {
    if roll < cfg.spawn.good_threshold {
        ShapeKind::Good
    } else if roll < cfg.spawn.bad_threshold {
        ShapeKind::Bad
    } else {
        ShapeKind::Exploder
    }
}

/// A point just outside of `edge`.
pub fn edge_point(rng: &mut GameRng, edge: Edge, bounds: Rect, cfg: &GameCfg) -> Vec2 {
    let off = cfg.bounds.spawn_offset;

    match edge {
        Edge::Top => vec2(rng.frand(bounds.left() + off, bounds.right() - off), bounds.top() - off),
        Edge::Bottom => vec2(
            rng.frand(bounds.left() + off, bounds.right() - off),
            bounds.bottom() + off,
        ),
        Edge::Left => vec2(bounds.left() - off, rng.frand(bounds.top() + off, bounds.bottom() - off)),
        Edge::Right => vec2(
            bounds.right() + off,
            rng.frand(bounds.top() + off, bounds.bottom() - off),
        ),
    }
}

/// Unit vector from `from` to `to`, or straight down if the points coincide.
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::Y)
}

pub fn spawn_shape(
    rng: &mut GameRng,
    bounds: Rect,
    elapsed: f32,
    mode: GameMode,
    cfg: &GameCfg,
) -> Shape {
    let spawn = &cfg.spawn;
    let edge = Edge::ALL[rng.irand(0, 3) as usize];
    let pos = edge_point(rng, edge, bounds, cfg);
    let dir = heading(pos, bounds.center());

    let speed = (rng.frand(spawn.min_speed, spawn.max_speed) + elapsed * spawn.speed_ramp)
        * mode.speed_scale(cfg);
    let kind = kind_from_roll(rng.irand(0, 99), cfg);
    let size = rng.frand(spawn.min_size, spawn.max_size);

    Shape::new(pos, dir * speed, size / 2.0, kind)
}

/// The small good shapes an exploder bursts into.
pub fn spawn_fragments(
    rng: &mut GameRng,
    pos: Vec2,
    cfg: &GameCfg,
) -> impl Iterator<Item = Shape> {
    let exploder = cfg.exploder;

    (0..exploder.fragments).map(move |_| {
        let radius = rng.frand(exploder.min_radius, exploder.max_radius);
        let angle = rng.frand(0.0, 2.0 * PI);
        let speed = rng.frand(exploder.min_speed, exploder.max_speed);

        Shape::new(pos, Vec2::from_angle(angle) * speed, radius, ShapeKind::Good)
    })
}

pub fn spawn_powerup(rng: &mut GameRng, bounds: Rect, cfg: &GameCfg) -> PowerUp {
    let inset = cfg.bounds.powerup_inset;
    let pos = vec2(
        rng.frand(bounds.left() + inset, bounds.right() - inset),
        rng.frand(bounds.top() + inset, bounds.bottom() - inset),
    );
    let kind = PowerUpKind::ALL[rng.irand(0, 2) as usize];

    PowerUp::new(pos, kind, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 900.0,
        h: 600.0,
    };

    #[test]
    fn test_interval_start_and_floor() {
        let cfg = GameCfg::default();

        assert_eq!(shape_interval(0.0, GameMode::Normal, &cfg), 0.8);
        assert_eq!(shape_interval(0.0, GameMode::Timed, &cfg), 0.8);
        assert_eq!(shape_interval(10_000.0, GameMode::Normal, &cfg), 0.12);
        for t in 0..2000 {
            assert!(shape_interval(t as f32, GameMode::Normal, &cfg) >= 0.12);
        }
    }

    #[test]
    fn test_interval_mode_scaling() {
        let cfg = GameCfg::default();

        assert_eq!(shape_interval(0.0, GameMode::Hardcore, &cfg), 0.4);
        assert!((shape_interval(0.0, GameMode::Endless, &cfg) - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_kind_thresholds() {
        let cfg = GameCfg::default();

        assert_eq!(kind_from_roll(0, &cfg), ShapeKind::Good);
        assert_eq!(kind_from_roll(59, &cfg), ShapeKind::Good);
        assert_eq!(kind_from_roll(60, &cfg), ShapeKind::Bad);
        assert_eq!(kind_from_roll(84, &cfg), ShapeKind::Bad);
        assert_eq!(kind_from_roll(85, &cfg), ShapeKind::Exploder);
        assert_eq!(kind_from_roll(99, &cfg), ShapeKind::Exploder);
    }

    #[test]
    fn test_heading_fallback() {
        let p = vec2(3.0, 3.0);
        assert_eq!(heading(p, p), Vec2::Y);
        assert_eq!(heading(Vec2::ZERO, vec2(0.0, -5.0)), vec2(0.0, -1.0));
    }

    #[test]
    fn test_spawned_shapes() {
        let cfg = GameCfg::default();
        let mut rng = GameRng::new(3);
        // top, bottom, left, right
        let mut per_edge = [0; 4];

        for _ in 0..500 {
            let shape = spawn_shape(&mut rng, BOUNDS, 0.0, GameMode::Normal, &cfg);
            let Vec2 { x, y } = shape.pos;
            let edge = if y == -20.0 {
                assert!((20.0..=880.0).contains(&x), "{x}");
                0
            } else if y == 620.0 {
                assert!((20.0..=880.0).contains(&x), "{x}");
                1
            } else if x == -20.0 {
                assert!((20.0..=580.0).contains(&y), "{y}");
                2
            } else if x == 920.0 {
                assert!((20.0..=580.0).contains(&y), "{y}");
                3
            } else {
                panic!("{} is not next to an edge", shape.pos);
            };
            per_edge[edge] += 1;

            assert!((8.0..17.0).contains(&shape.radius));
            assert!(shape.alive);

            let speed = shape.vel.length();
            assert!((59.9..140.1).contains(&speed), "{speed}");

            let to_center = (BOUNDS.center() - shape.pos).normalize();
            assert!(shape.vel.normalize().dot(to_center) > 0.999);
        }

        // 125 each on average
        for count in per_edge {
            assert!((80..=170).contains(&count), "{per_edge:?}");
        }
    }

    #[test]
    fn test_speed_ramp() {
        let cfg = GameCfg::default();
        let mut rng = GameRng::new(11);

        for _ in 0..100 {
            let shape = spawn_shape(&mut rng, BOUNDS, 100.0, GameMode::Hardcore, &cfg);
            let speed = shape.vel.length();
            assert!(speed >= (60.0 + 200.0) * 1.5 - 0.1);
            assert!(speed <= (140.0 + 200.0) * 1.5 + 0.1);
        }
    }

    #[test]
    fn test_fragments() {
        let cfg = GameCfg::default();
        let mut rng = GameRng::new(5);
        let pos = vec2(120.0, 80.0);

        let fragments = spawn_fragments(&mut rng, pos, &cfg).collect::<Vec<_>>();

        assert_eq!(fragments.len(), 4);
        for frag in fragments {
            assert_eq!(frag.kind, ShapeKind::Good);
            assert_eq!(frag.pos, pos);
            let speed = frag.vel.length();
            assert!((79.9..=180.1).contains(&speed), "{speed}");
            assert!((5.0..10.0).contains(&frag.radius));
        }
    }

    #[test]
    fn test_fragment_directions_spread() {
        let cfg = GameCfg::default();
        let mut rng = GameRng::new(5);
        let mut quadrants = [0; 4];
        let mut dir_sum = Vec2::ZERO;
        let mut total = 0;

        for _ in 0..1000 {
            for frag in spawn_fragments(&mut rng, Vec2::ZERO, &cfg) {
                let dir = frag.vel.normalize();
                let quadrant = match (dir.x >= 0.0, dir.y >= 0.0) {
                    (true, true) => 0,
                    (false, true) => 1,
                    (false, false) => 2,
                    (true, false) => 3,
                };
                quadrants[quadrant] += 1;
                dir_sum += dir;
                total += 1;
            }
        }

        assert_eq!(total, 4000);
        for count in quadrants {
            assert!(count * 100 > total * 15, "{quadrants:?}");
        }
        let mean = dir_sum / total as f32;
        assert!(mean.length() < 0.05, "{mean}");
    }

    #[test]
    fn test_powerup_placement() {
        let cfg = GameCfg::default();
        let mut rng = GameRng::new(9);

        for _ in 0..200 {
            let pu = spawn_powerup(&mut rng, BOUNDS, &cfg);
            assert!((50.0..=850.0).contains(&pu.pos.x));
            assert!((50.0..=550.0).contains(&pu.pos.y));
        }
    }
}
