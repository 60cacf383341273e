use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Ease the opponent paddle toward the ball.
///
/// Closes `cpu_follow_rate` of the gap between the paddle center and the ball
/// every tick, so a fast ball can outrun it. The paddle is not clamped.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Cpu {
            paddle.pos.y += (ball_y - paddle.center_y()) * config.cpu_follow_rate;
        }
    }
}
