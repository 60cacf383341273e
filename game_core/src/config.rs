use crate::{Color, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub cpu_follow_rate: f32,
    pub net_width: f32,
    pub net_color: Color,
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            cpu_follow_rate: Params::CPU_FOLLOW_RATE,
            net_width: Params::NET_WIDTH,
            net_color: Color::WHITE,
            fps: Params::FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Nominal milliseconds between ticks
    pub fn tick_period_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}
