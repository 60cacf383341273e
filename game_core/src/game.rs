use crate::render::{render, DrawSurface};
use crate::systems::track_pointer;
use crate::*;
use hecs::{Entity, World};

/// All simulation state for one session, owned by the game loop
pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    player: Entity,
    cpu: Entity,
    ball: Entity,
}

impl Game {
    /// Lay out both paddles and the ball for a surface of `map`'s size
    pub fn new(map: GameMap, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let size = config.paddle_size();

        let player = create_paddle(
            &mut world,
            Paddle::new(Side::Player, map.paddle_spawn(Side::Player, size), size),
        );
        let cpu = create_paddle(
            &mut world,
            Paddle::new(Side::Cpu, map.paddle_spawn(Side::Cpu, size), size),
        );

        let speed = config.ball_speed_initial;
        let ball = create_ball(
            &mut world,
            Ball::new(
                map.ball_spawn(),
                glam::Vec2::splat(speed),
                config.ball_radius,
                speed,
            ),
        );

        log::debug!(
            "new game on {}x{} surface, seed {}",
            map.width,
            map.height,
            seed
        );

        Self {
            world,
            time: Time::from_fps(config.fps),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            player,
            cpu,
            ball,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render(surface, &self.world, &self.map, &self.config, &self.score);
    }

    /// Pointer moved to `pointer_y`; `surface_top` is the surface's offset
    pub fn pointer_moved(&mut self, pointer_y: f32, surface_top: f32) {
        let paddle_height = self.config.paddle_height;
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.player) {
            track_pointer(&mut paddle.pos.y, pointer_y, surface_top, paddle_height);
        }
    }

    pub fn player(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player).ok().map(|p| *p)
    }

    pub fn cpu(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.cpu).ok().map(|p| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Mutable access to the ball, for hosts that need to place it
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn cpu_mut(&mut self) -> Option<hecs::RefMut<'_, Paddle>> {
        self.world.get::<&mut Paddle>(self.cpu).ok()
    }
}
