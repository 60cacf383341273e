//! Fixed-rate driver tying the simulation to a drawing surface

use crate::render::DrawSurface;
use crate::Game;

/// Owns a game and its surface. A host timer calls `on_tick` every
/// `period_ms` and forwards pointer moves to `on_pointer_move`.
///
/// Ticks are never skipped or merged: one call, one step, one frame.
pub struct GameLoop<S: DrawSurface> {
    pub game: Game,
    pub surface: S,
}

impl<S: DrawSurface> GameLoop<S> {
    pub fn new(game: Game, surface: S) -> Self {
        Self { game, surface }
    }

    /// Nominal milliseconds between `on_tick` calls
    pub fn period_ms(&self) -> f64 {
        self.game.config.tick_period_ms()
    }

    /// Step the simulation once, then redraw
    pub fn on_tick(&mut self) {
        self.game.tick();
        self.game.render(&mut self.surface);
    }

    pub fn on_pointer_move(&mut self, pointer_y: f32, surface_top: f32) {
        self.game.pointer_moved(pointer_y, surface_top);
    }

    /// Run `ticks` frames back to back, without a timer
    pub fn run_for(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.on_tick();
        }
    }
}
