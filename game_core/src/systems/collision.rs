use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom edges.
///
/// Flips vertical velocity only; the ball is left where it is, so it can sit
/// past the edge for a tick.
pub fn bounce_walls(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("ball hit wall at y={:.1}", ball.pos.y);
        }
    }
}

/// Paddle the ball can currently hit, chosen by which half holds its leading
/// edge. Direction of travel is ignored.
pub fn target_side(ball: &Ball, map: &GameMap) -> Side {
    if ball.pos.x + ball.radius < map.center_x() {
        Side::Player
    } else {
        Side::Cpu
    }
}

/// Send the ball back off `paddle`, angled by where it struck.
///
/// Contact at the paddle center leaves horizontally; contact at either end
/// leaves at `max_bounce_angle`. The horizontal component is
/// `direction * speed + cos(angle)`, an additive mix rather than a rotation.
pub fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let half_height = paddle.size.y / 2.0;
    let collide_point = ball.pos.y - paddle.center_y();
    let angle = config.max_bounce_angle * (collide_point / half_height);

    ball.vel.x = paddle.side.direction() * ball.speed + angle.cos();
    ball.vel.y = ball.speed * angle.sin();
    ball.speed = (ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
}

/// Check the ball against its target paddle and deflect on overlap
pub fn check_paddle_hit(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let target = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| target_side(ball, map))
    };

    let Some(target) = target else {
        return; // No ball in world
    };

    let paddle = {
        let mut paddle_query = world.query::<&Paddle>();
        paddle_query
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == target)
    };

    let Some(paddle) = paddle else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bounds().overlaps(&paddle.bounds()) {
            deflect(ball, &paddle, config);
            events.ball_hit_paddle = true;
            log::debug!(
                "ball hit {:?} paddle, vel=({:.2}, {:.2}) speed={:.1}",
                paddle.side,
                ball.vel.x,
                ball.vel.y,
                ball.speed
            );
        }
    }
}
