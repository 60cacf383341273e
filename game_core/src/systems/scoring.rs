use crate::{Ball, Config, Events, GameMap, GameRng, Score};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius < 0.0 {
            // Past the player's edge
            score.increment_cpu();
            events.cpu_scored = true;
            ball.reset(map, config.ball_speed_initial, rng);
            log::info!("cpu scores ({} - {})", score.player, score.cpu);
        } else if ball.pos.x + ball.radius > map.width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(map, config.ball_speed_initial, rng);
            log::info!("player scores ({} - {})", score.player, score.cpu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new(800.0, 600.0);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, map, score, events, rng)
    }

    #[test]
    fn test_cpu_scores_when_ball_exits_left() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::new(Vec2::new(5.0, 300.0), Vec2::new(-8.0, 8.0), 12.0, 8.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.cpu, 1, "Cpu should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.cpu_scored && !events.player_scored);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, 400.0);
        assert_eq!(ball.vel.x, 8.0, "Horizontal direction flips");
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(795.0, 300.0), Vec2::new(8.0, 0.0), 12.0, 8.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.cpu, 0, "Cpu should not score");
        assert!(events.player_scored && !events.cpu_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::new(Vec2::new(-30.0, 50.0), Vec2::new(-17.0, -6.0), 12.0, 22.4),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, map.center_x());
        assert!(ball.pos.y >= ball.radius && ball.pos.y <= map.height - ball.radius);
        assert_eq!(ball.vel, Vec2::new(17.0, -6.0), "Vertical velocity carries over");
        assert_eq!(ball.speed, config.ball_speed_initial);
    }

    #[test]
    fn test_no_scoring_when_edge_is_on_boundary() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(12.0, 300.0), Vec2::new(-8.0, 0.0), 12.0, 8.0),
        );
        create_ball(
            &mut world,
            Ball::new(Vec2::new(788.0, 300.0), Vec2::new(8.0, 0.0), 12.0, 8.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score while the ball touches the edge");
        assert!(!events.player_scored && !events.cpu_scored);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(
            &mut world,
            Ball::new(Vec2::new(795.0, 300.0), Vec2::new(8.0, 0.0), 12.0, 8.0),
        );
        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);
        events.clear();

        world.get::<&mut Ball>(entity).unwrap().pos.x = 795.0;
        check_scoring(&mut world, &map, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 2, "Scores should accumulate");
        assert_eq!(score.cpu, 0);
    }
}
