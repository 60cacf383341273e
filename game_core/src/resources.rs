/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,   // Nominal seconds per tick; motion is per tick, not scaled by this
    pub now: f32,  // Total elapsed time
    pub tick: u64, // Ticks completed
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            now: 0.0,
            tick: 0,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        self.now += self.dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::from_fps(crate::Params::FPS)
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32, // Left, pointer-driven
    pub cpu: u32,    // Right, heuristic-driven
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_cpu(&mut self) {
        self.cpu += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub cpu_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.cpu_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
