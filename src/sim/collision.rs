//! Collision detection and response for the rectangular playfield
//!
//! Wall handling mutates the ball directly. Obstacle checks only report
//! contacts so the caller can apply them after iteration (bricks are removed
//! in a second pass).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, BrickField, Paddle};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};

/// Which boundary rule fired this tick (at most one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallContact {
    #[default]
    None,
    /// Left or right wall, horizontal velocity reversed
    Side,
    /// Ceiling, or the below-field safety catch; vertical velocity reversed
    TopBottom,
    /// Ball fell out of the bottom of the playfield
    Lost,
}

/// Resolve the ball against the playfield edges
///
/// Rules are checked in priority order and are mutually exclusive:
/// 1. a side wall the ball is moving into bounces it horizontally;
/// 2. moving up with the top edge at/above the ceiling, or entirely below
///    the floor, bounces it vertically;
/// 3. entirely below the floor while moving down is a lost ball.
///
/// Rule 1 is narrower than a plain overlap test: a ball still touching a
/// wall but already moving away from it is left alone, so it cannot be
/// reversed back into the wall on the next tick.
///
/// Never moves the ball.
pub fn resolve_walls(ball: &mut Ball) -> WallContact {
    let bounds = ball.bounds();

    let into_left = bounds.left() <= 0.0 && ball.vel.x < 0.0;
    let into_right = bounds.right() >= GAME_WIDTH && ball.vel.x > 0.0;
    if into_left || into_right {
        ball.bounce_horizontal();
        return WallContact::Side;
    }

    let gone = bounds.top() <= 0.0;
    if ball.moving_up() && (bounds.top() >= GAME_HEIGHT || gone) {
        ball.bounce_vertical();
        return WallContact::TopBottom;
    }

    if gone && ball.moving_down() {
        return WallContact::Lost;
    }

    WallContact::None
}

/// Whether the ball is landing on the paddle
///
/// Only a falling ball counts, so a ball still overlapping the paddle after
/// bouncing is not reversed again.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    if !ball.moving_down() {
        return false;
    }
    let rect = paddle.bounds();
    ball.corners().bottom().iter().any(|&c| rect.contains(c))
}

/// Which side of the ball touched a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickSide {
    /// A bottom corner is inside the brick (ball came down onto it)
    Bottom,
    /// A top corner is inside the brick (ball came up into it)
    Top,
}

/// A brick touched by one of the ball's corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickContact {
    pub brick_id: u32,
    pub side: BrickSide,
}

/// Every brick containing a corner of the ball, in field order
///
/// Bottom corners take precedence over top corners for the same brick.
/// Bricks never overlap, so each corner touches at most one of them.
pub fn brick_contacts(ball: &Ball, field: &BrickField) -> Vec<BrickContact> {
    let corners = ball.corners();
    let hit_by = |points: [Vec2; 2]| points.map(|p| field.brick_at(p).map(|b| b.id));
    let bottom = hit_by(corners.bottom());
    let top = hit_by(corners.top());
    if bottom.iter().chain(&top).all(Option::is_none) {
        return Vec::new();
    }

    field
        .bricks()
        .iter()
        .filter_map(|brick| {
            let id = Some(brick.id);
            let side = if bottom.contains(&id) {
                BrickSide::Bottom
            } else if top.contains(&id) {
                BrickSide::Top
            } else {
                return None;
            };
            Some(BrickContact {
                brick_id: brick.id,
                side,
            })
        })
        .collect()
}

/// Reverse vertical velocity if the contact opposes the ball's motion
///
/// Returns whether the ball bounced.
pub fn react_to_brick(ball: &mut Ball, side: BrickSide) -> bool {
    let opposes = match side {
        BrickSide::Bottom => ball.moving_down(),
        BrickSide::Top => ball.moving_up(),
    };
    if opposes {
        ball.bounce_vertical();
    }
    opposes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Brick, BrickColor};

    fn brick(id: u32, x: f32, y: f32) -> Brick {
        Brick {
            id,
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color: BrickColor::Green,
        }
    }

    #[test]
    fn test_left_wall_reverses_without_moving() {
        let mut ball = Ball::new(Vec2::new(0.0, 300.0), Vec2::new(-2.0, -5.0));
        assert_eq!(resolve_walls(&mut ball), WallContact::Side);
        assert_eq!(ball.vel, Vec2::new(2.0, -5.0));
        assert_eq!(ball.pos, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_right_wall_reverses() {
        let x = GAME_WIDTH - BALL_DIAMETER + 1.0;
        let mut ball = Ball::new(Vec2::new(x, 300.0), Vec2::new(3.0, 5.0));
        assert_eq!(resolve_walls(&mut ball), WallContact::Side);
        assert_eq!(ball.vel.x, -3.0);
    }

    #[test]
    fn test_wall_does_not_recapture_departing_ball() {
        // Still overlapping the wall but already heading away
        let mut ball = Ball::new(Vec2::new(-1.0, 300.0), Vec2::new(2.0, -5.0));
        assert_eq!(resolve_walls(&mut ball), WallContact::None);
        assert_eq!(ball.vel, Vec2::new(2.0, -5.0));
    }

    #[test]
    fn test_ceiling_bounce_only_when_rising() {
        let y = GAME_HEIGHT - BALL_DIAMETER;
        let mut rising = Ball::new(Vec2::new(100.0, y), Vec2::new(1.0, 5.0));
        assert_eq!(resolve_walls(&mut rising), WallContact::TopBottom);
        assert_eq!(rising.vel.y, -5.0);

        let mut falling = Ball::new(Vec2::new(100.0, y), Vec2::new(1.0, -5.0));
        assert_eq!(resolve_walls(&mut falling), WallContact::None);
        assert_eq!(falling.vel.y, -5.0);
    }

    #[test]
    fn test_side_wall_takes_priority_over_ceiling() {
        let y = GAME_HEIGHT - BALL_DIAMETER;
        let mut ball = Ball::new(Vec2::new(0.0, y), Vec2::new(-1.0, 5.0));
        assert_eq!(resolve_walls(&mut ball), WallContact::Side);
        assert_eq!(ball.vel, Vec2::new(1.0, 5.0));
    }

    #[test]
    fn test_ball_lost_only_when_fully_below_and_falling() {
        // Partially below: still in play
        let mut partial = Ball::new(Vec2::new(100.0, -5.0), Vec2::new(1.0, -5.0));
        assert_eq!(resolve_walls(&mut partial), WallContact::None);

        let mut gone = Ball::new(Vec2::new(100.0, -BALL_DIAMETER), Vec2::new(1.0, -5.0));
        assert_eq!(resolve_walls(&mut gone), WallContact::Lost);
        assert_eq!(gone.vel.y, -5.0);
    }

    #[test]
    fn test_below_field_rising_ball_is_caught() {
        let mut ball = Ball::new(Vec2::new(100.0, -30.0), Vec2::new(1.0, 5.0));
        assert_eq!(resolve_walls(&mut ball), WallContact::TopBottom);
        assert_eq!(ball.vel.y, -5.0);
        // And is then lost on the next check
        assert_eq!(resolve_walls(&mut ball), WallContact::Lost);
    }

    #[test]
    fn test_paddle_contact_requires_falling_ball() {
        let paddle = Paddle::at(100.0);
        let pos = Vec2::new(110.0, PADDLE_OFFSET + PADDLE_HEIGHT - 1.0);
        let falling = Ball::new(pos, Vec2::new(0.0, -5.0));
        let rising = Ball::new(pos, Vec2::new(0.0, 5.0));
        assert!(paddle_contact(&falling, &paddle));
        assert!(!paddle_contact(&rising, &paddle));
    }

    #[test]
    fn test_paddle_contact_with_right_corner_only() {
        let paddle = Paddle::at(100.0);
        // Left corner is off the paddle, right corner just on its left edge
        let pos = Vec2::new(100.0 - BALL_DIAMETER, PADDLE_OFFSET + 2.0);
        let ball = Ball::new(pos, Vec2::new(0.0, -5.0));
        assert!(paddle_contact(&ball, &paddle));

        let miss = Ball::new(pos - Vec2::new(0.5, 0.0), Vec2::new(0.0, -5.0));
        assert!(!paddle_contact(&miss, &paddle));
    }

    #[test]
    fn test_brick_contacts_report_side() {
        let field = BrickField::from_bricks(vec![brick(1, 100.0, 400.0), brick(2, 300.0, 400.0)]);

        // Top corners poke into brick 1 from below
        let rising = Ball::new(Vec2::new(110.0, 400.0 - BALL_DIAMETER + 2.0), Vec2::new(1.0, 5.0));
        let contacts = brick_contacts(&rising, &field);
        assert_eq!(
            contacts,
            vec![BrickContact {
                brick_id: 1,
                side: BrickSide::Top
            }]
        );

        // Bottom corners rest on brick 2
        let falling = Ball::new(Vec2::new(310.0, 400.0 + BRICK_HEIGHT - 1.0), Vec2::new(1.0, -5.0));
        let contacts = brick_contacts(&falling, &field);
        assert_eq!(contacts[0].brick_id, 2);
        assert_eq!(contacts[0].side, BrickSide::Bottom);
    }

    #[test]
    fn test_brick_contacts_can_span_two_bricks() {
        let field = BrickField::from_bricks(vec![
            brick(1, 100.0, 400.0),
            brick(2, 100.0 + BRICK_WIDTH + BRICK_SEP_H, 400.0),
        ]);
        // Straddles the gap between the two bricks
        let x = 100.0 + BRICK_WIDTH - 5.0;
        let ball = Ball::new(Vec2::new(x, 400.0 - BALL_DIAMETER + 2.0), Vec2::new(1.0, 5.0));
        let ids: Vec<u32> = brick_contacts(&ball, &field).iter().map(|c| c.brick_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_brick_contacts_follow_field_order_across_rows() {
        // Upper row listed first, as in the grid layout
        let field = BrickField::from_bricks(vec![brick(1, 100.0, 412.0), brick(2, 100.0, 400.0)]);
        let ball = Ball::new(Vec2::new(110.0, 401.0), Vec2::new(1.0, -5.0));
        assert_eq!(field.brick_at(ball.corners().bottom_left).map(|b| b.id), Some(2));
        assert_eq!(field.brick_at(ball.corners().top_left).map(|b| b.id), Some(1));

        let contacts = brick_contacts(&ball, &field);
        assert_eq!(
            contacts,
            vec![
                BrickContact {
                    brick_id: 1,
                    side: BrickSide::Top
                },
                BrickContact {
                    brick_id: 2,
                    side: BrickSide::Bottom
                },
            ]
        );
    }

    #[test]
    fn test_brick_contacts_empty_in_open_space() {
        let field = BrickField::default();
        let ball = Ball::new(Vec2::new(200.0, 200.0), Vec2::new(1.0, -5.0));
        assert!(brick_contacts(&ball, &field).is_empty());
    }

    #[test]
    fn test_react_to_brick() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 5.0));
        assert!(react_to_brick(&mut ball, BrickSide::Top));
        assert_eq!(ball.vel.y, -5.0);
        // Second brick in the same tick: already heading away
        assert!(!react_to_brick(&mut ball, BrickSide::Top));
        assert_eq!(ball.vel.y, -5.0);
        assert!(react_to_brick(&mut ball, BrickSide::Bottom));
        assert_eq!(ball.vel.y, 5.0);
    }
}
