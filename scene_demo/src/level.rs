//! Level layouts and the game-side collision responses, dispatched on `BodyTag`.

use std::cell::Cell;
use std::rc::Rc;

use scene2d::forces::UniformGravity;
use scene2d::responses::{consume, halt};
use scene2d::shapes::{rectangle, regular_polygon};
use scene2d::{Body, BodyError, BodyHandle, BodyTag, CollisionHandler, Scene, Vec2};

use crate::config::{DemoConfig, Scenario};

const PLAYER_RADIUS: f64 = 15.0;
const PLAYER_SIDES: usize = 20;
const PLAYER_MASS: f64 = 1.0;

/// A static rectangle of the level, given by center and size.
struct Piece {
    tag: BodyTag,
    center: Vec2,
    width: f64,
    height: f64,
}

const fn piece(tag: BodyTag, x: f64, y: f64, width: f64, height: f64) -> Piece {
    Piece {
        tag,
        center: Vec2::new(x, y),
        width,
        height,
    }
}

const BRICKS: &[Piece] = &[
    piece(BodyTag::Platform, 160.0, 425.0, 320.0, 20.0),
    piece(BodyTag::Platform, 560.0, 425.0, 150.0, 20.0),
    piece(BodyTag::Platform, 325.0, 200.0, 650.0, 20.0),
    piece(BodyTag::Platform, 180.0, 75.0, 175.0, 20.0),
    piece(BodyTag::Platform, 500.0, 75.0, 175.0, 20.0),
];

const LAVA: &[Piece] = &[
    piece(BodyTag::Platform, 500.0, 75.0, 175.0, 20.0),
    piece(BodyTag::Lava, 500.0, 90.0, 165.0, 7.0),
];

const LEDGE: &[Piece] = &[
    piece(BodyTag::Platform, 425.0, 300.0, 650.0, 20.0),
    piece(BodyTag::Wall, 740.0, 400.0, 20.0, 200.0),
    piece(BodyTag::Gem, 250.0, 325.0, 10.0, 10.0),
    piece(BodyTag::Gem, 350.0, 325.0, 10.0, 10.0),
    piece(BodyTag::Gem, 450.0, 325.0, 10.0, 10.0),
    piece(BodyTag::Gem, 550.0, 325.0, 10.0, 10.0),
];

/// Counters shared with the collision responses.
#[derive(Debug, Default)]
pub struct Stats {
    pub gems: Cell<u32>,
    pub resets: Cell<u32>,
}

pub struct Level {
    pub scene: Scene,
    pub player: BodyHandle,
    pub spawn: Vec2,
    pub stats: Rc<Stats>,
}

/// Builds the scene for `config.scenario`. The player is always body 0.
pub fn build(config: &DemoConfig) -> Result<Level, BodyError> {
    let (pieces, spawn, initial_velocity) = match config.scenario {
        Scenario::Platform => (BRICKS, Vec2::new(500.0, 130.0), Vec2::ZERO),
        Scenario::Lava => (LAVA, Vec2::new(500.0, 130.0), Vec2::ZERO),
        Scenario::Gems => (LEDGE, Vec2::new(150.0, 330.0), Vec2::new(120.0, 0.0)),
    };

    let mut scene = Scene::with_config(config.scene.clone());
    let stats = Rc::new(Stats::default());

    let mut player_body = Body::new(
        regular_polygon(spawn, PLAYER_RADIUS, PLAYER_SIDES),
        PLAYER_MASS,
        BodyTag::Player,
    )?;
    player_body.set_velocity(initial_velocity);
    let player = scene.add_body(player_body);
    scene.register_force(&[player], UniformGravity::new(config.gravity));

    for piece in pieces {
        let body = Body::static_body(rectangle(piece.center, piece.width, piece.height), piece.tag)?;
        let handle = scene.add_body(body);
        match piece.tag {
            BodyTag::Platform | BodyTag::Elevator => {
                scene.register_collision(player, handle, land_on());
            }
            BodyTag::Wall | BodyTag::Door | BodyTag::Obstacle => {
                scene.register_collision(player, handle, halt());
            }
            BodyTag::Lava => {
                scene.register_collision(player, handle, send_to_spawn(spawn, Rc::clone(&stats)));
            }
            BodyTag::Gem => {
                scene.register_collision(player, handle, collect(Rc::clone(&stats)));
            }
            BodyTag::Button | BodyTag::Player => {}
        }
    }

    log::info!(
        "Built {} level: {} bodies, {} collision bindings",
        config.scenario,
        scene.body_count(),
        scene.collision_binding_count()
    );
    Ok(Level {
        scene,
        player,
        spawn,
        stats,
    })
}

/// Falling onto the top of a platform stops the fall and puts the mover on the
/// surface. Hitting it from the side or below just blocks.
fn land_on() -> impl CollisionHandler {
    let mut blocked = halt();
    move |mover: &mut Body, surface: &mut Body, axis: Vec2| {
        let top = surface.aabb().max.y;
        let centroid = mover.centroid();
        let velocity = mover.velocity();
        if centroid.y > top && velocity.y < 0.0 {
            let half_height = mover.aabb().height() / 2.0;
            mover.set_velocity(Vec2::new(velocity.x, 0.0));
            mover.set_centroid(Vec2::new(centroid.x, top + half_height));
        } else {
            blocked.on_collision(mover, surface, axis);
        }
    }
}

fn send_to_spawn(spawn: Vec2, stats: Rc<Stats>) -> impl CollisionHandler {
    move |mover: &mut Body, _hazard: &mut Body, _axis: Vec2| {
        mover.set_centroid(spawn);
        mover.set_velocity(Vec2::ZERO);
        stats.resets.set(stats.resets.get() + 1);
        log::info!("Touched lava, back to spawn ({} resets)", stats.resets.get());
    }
}

fn collect(stats: Rc<Stats>) -> impl CollisionHandler {
    let mut pick_up = consume();
    move |collector: &mut Body, gem: &mut Body, axis: Vec2| {
        pick_up.on_collision(collector, gem, axis);
        stats.gems.set(stats.gems.get() + 1);
        log::info!("Collected gem {}", stats.gems.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(scenario: Scenario, steps: usize) -> Level {
        let config = DemoConfig {
            scenario,
            steps,
            ..DemoConfig::default()
        };
        let mut level = build(&config).unwrap();
        for _ in 0..config.steps {
            level.scene.tick(config.dt);
        }
        level
    }

    #[test]
    fn test_player_is_body_zero() {
        for scenario in Scenario::ALL {
            let level = build(&DemoConfig { scenario, ..DemoConfig::default() }).unwrap();
            assert_eq!(level.scene.index_of(level.player), Some(0));
            assert_eq!(level.scene.get_body(0).tag(), BodyTag::Player);
        }
    }

    #[test]
    fn test_platform_level_player_rests_on_brick() {
        let level = run(Scenario::Platform, 120);
        let player = level.scene.get_body(0);
        assert_eq!(player.velocity().y, 0.0);
        assert!((player.centroid().y - 100.0).abs() < 1e-6);
        assert!((player.centroid().x - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_lava_level_sends_player_back() {
        let level = run(Scenario::Lava, 120);
        assert!(level.stats.resets.get() >= 1);
        assert!(level.scene.get_body(0).centroid().y > 93.5);
    }

    #[test]
    fn test_gems_level_collects_every_gem_and_stops_at_wall() {
        let level = run(Scenario::Gems, 600);
        assert_eq!(level.stats.gems.get(), 4);
        // Player, ledge and wall remain
        assert_eq!(level.scene.body_count(), 3);
        let player = level.scene.get_body(0);
        assert_eq!(player.velocity().x, 0.0);
        assert!(player.centroid().x > 700.0 && player.centroid().x < 730.0);
    }
}
