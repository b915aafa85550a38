use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Good,
    Bad,
    Exploder,
}

impl ShapeKind {
    pub fn color(self) -> Color {
        match self {
            ShapeKind::Good => Color::from_rgba(100, 220, 100, 255),
            ShapeKind::Bad => Color::from_rgba(220, 100, 100, 255),
            ShapeKind::Exploder => Color::from_rgba(220, 200, 80, 255),
        }
    }
}

/// A clickable circle drifting in a straight line.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: ShapeKind,
    pub alive: bool,
}

impl Shape {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, kind: ShapeKind) -> Self {
        Self {
            pos,
            vel,
            radius,
            kind,
            alive: true,
        }
    }

    pub fn tick(&mut self, dt: f32, frozen: bool) {
        if !self.alive || frozen {
            return;
        }

        self.pos += self.vel * dt;
    }

    pub fn hit_test(&self, point: Vec2) -> bool {
        point.distance_squared(self.pos) <= self.radius * self.radius
    }

    /// Checks if the shape is further than `margin` outside of `bounds`.
    pub fn out_of_bounds(&self, bounds: Rect, margin: f32) -> bool {
        self.pos.x < bounds.left() - margin
            || self.pos.x > bounds.right() + margin
            || self.pos.y < bounds.top() - margin
            || self.pos.y > bounds.bottom() + margin
    }
}
