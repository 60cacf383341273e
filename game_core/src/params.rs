/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 8.0; // Not read by the simulation

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED_INITIAL: f32 = 8.0;
    pub const BALL_SPEED_MAX: f32 = 40.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // Added on every paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Opponent
    pub const CPU_FOLLOW_RATE: f32 = 0.1; // Fraction of the gap closed per tick

    // Net
    pub const NET_WIDTH: f32 = 5.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;

    // Scores
    pub const SCORE_FONT_SIZE: u32 = 120;

    // Timing
    pub const FPS: u32 = 60;
}
