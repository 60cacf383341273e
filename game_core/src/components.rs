use glam::Vec2;

use crate::map::Aabb;

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Player,
    /// Right paddle, driven by the pursuit heuristic
    Cpu,
}

impl Side {
    /// Horizontal sign a ball takes after bouncing off this side's paddle
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Cpu => -1.0,
        }
    }
}

/// Fill color, stored as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#808080`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner; x is fixed, y is never clamped
    pub size: Vec2, // Width, height
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            pos,
            size,
            color: Color::WHITE,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Units per tick
    pub radius: f32,
    pub speed: f32, // Magnitude used for the next deflection
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            color: Color::WHITE,
        }
    }

    /// Square box enclosing the ball
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Serve again from the center line after a goal.
    ///
    /// Only the horizontal direction flips; the vertical velocity carries over.
    pub fn reset(&mut self, map: &crate::GameMap, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        let low = self.radius;
        let high = (map.height - self.radius).max(low);
        self.pos = Vec2::new(map.center_x(), rng.0.gen_range(low..=high));
        self.vel.x = -self.vel.x;
        self.speed = speed;
    }
}
