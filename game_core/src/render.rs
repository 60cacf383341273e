//! Surface-agnostic drawing of the current game state

use crate::{Ball, Color, Config, GameMap, Paddle, Params, Score};
use hecs::World;

/// Font settings for `DrawSurface::draw_text`
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: u32,
    pub weight: &'static str,
    pub family: &'static str,
}

impl TextStyle {
    /// Large bold monospace used for the scores
    pub fn score() -> Self {
        Self {
            size: Params::SCORE_FONT_SIZE,
            weight: "bold",
            family: "Courier New",
        }
    }
}

/// A 2D drawing target. Calls are synchronous and assumed to succeed.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    /// Draw `text` horizontally centered on `x`, baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, style: &TextStyle);
}

/// Dashed divider down the center line
pub fn draw_net<S: DrawSurface + ?Sized>(surface: &mut S, map: &GameMap, config: &Config) {
    let x = map.center_x() - config.net_width;
    let mut y = 0.0;
    while y < map.height {
        surface.fill_rect(x, y, config.net_width, Params::NET_SEGMENT_HEIGHT, config.net_color);
        y += Params::NET_SPACING;
    }
}

/// Redraw the whole frame: background, net, scores, paddles, ball
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    world: &World,
    map: &GameMap,
    config: &Config,
    score: &Score,
) {
    surface.fill_rect(0.0, 0.0, map.width, map.height, Color::BLACK);
    draw_net(surface, map, config);

    let style = TextStyle::score();
    let mid_y = map.height / 2.0;
    surface.draw_text(
        &score.player.to_string(),
        map.width / 4.0,
        mid_y,
        Color::GRAY,
        &style,
    );
    surface.draw_text(
        &score.cpu.to_string(),
        3.0 * map.width / 4.0,
        mid_y,
        Color::GRAY,
        &style,
    );

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        surface.fill_rect(
            paddle.pos.x,
            paddle.pos.y,
            paddle.size.x,
            paddle.size.y,
            paddle.color,
        );
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Rect(f32, f32, f32, f32, Color),
        Circle(f32, f32, f32, Color),
        Text(String, f32, f32, Color),
    }

    /// Records every call for inspection
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::Rect(x, y, w, h, color));
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
            self.calls.push(DrawCall::Circle(cx, cy, r, color));
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, style: &TextStyle) {
            assert_eq!(style, &TextStyle::score());
            self.calls.push(DrawCall::Text(text.to_string(), x, y, color));
        }
    }

    #[test]
    fn test_net_segments() {
        let mut surface = RecordingSurface::default();
        draw_net(&mut surface, &GameMap::new(800.0, 600.0), &Config::new());

        // y = 0, 15, ..., 585
        assert_eq!(surface.calls.len(), 40);
        assert_eq!(
            surface.calls[0],
            DrawCall::Rect(395.0, 0.0, 5.0, 10.0, Color::WHITE)
        );
        assert_eq!(
            surface.calls[39],
            DrawCall::Rect(395.0, 585.0, 5.0, 10.0, Color::WHITE)
        );
    }

    #[test]
    fn test_render_order_and_contents() {
        let map = GameMap::new(800.0, 600.0);
        let config = Config::new();
        let mut world = World::new();
        create_paddle(
            &mut world,
            Paddle::new(Side::Player, Vec2::new(0.0, 240.0), config.paddle_size()),
        );
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, 300.0), Vec2::new(8.0, 8.0), 12.0, 8.0),
        );
        let score = Score { player: 3, cpu: 7 };

        let mut surface = RecordingSurface::default();
        render(&mut surface, &world, &map, &config, &score);

        let calls = &surface.calls;
        assert_eq!(calls[0], DrawCall::Rect(0.0, 0.0, 800.0, 600.0, Color::BLACK));
        assert_eq!(
            calls[41],
            DrawCall::Text("3".into(), 200.0, 300.0, Color::GRAY)
        );
        assert_eq!(
            calls[42],
            DrawCall::Text("7".into(), 600.0, 300.0, Color::GRAY)
        );
        assert_eq!(
            calls[43],
            DrawCall::Rect(0.0, 240.0, 18.0, 120.0, Color::WHITE)
        );
        assert_eq!(
            calls.last(),
            Some(&DrawCall::Circle(400.0, 300.0, 12.0, Color::WHITE))
        );
        assert_eq!(calls.len(), 45);
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let map = GameMap::new(800.0, 600.0);
        let config = Config::new();
        let mut world = World::new();
        let ball = create_ball(
            &mut world,
            Ball::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, 2.0), 12.0, 8.0),
        );

        render(&mut RecordingSurface::default(), &world, &map, &config, &Score::new());

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
    }
}
