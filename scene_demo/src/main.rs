use std::env;
use std::error::Error;

use env_logger::Env;

mod config;
mod level;

use config::{DemoConfig, Scenario};

/// Usage: `scene_demo [platform|lava|gems] [config.json]`
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let mut config = match args.get(2) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(name) = args.get(1) {
        config.scenario = name.parse::<Scenario>()?;
    }

    log::info!("Running scenario: {}", config.scenario);
    let mut level = level::build(&config)?;

    let mut collisions = 0;
    for frame in 0..config.steps {
        let report = level.scene.tick(config.dt);
        collisions += report.collisions;

        if config.log_every > 0 && frame % config.log_every == 0 {
            if let Some(player) = level.scene.body(level.player) {
                let pos = player.centroid();
                let vel = player.velocity();
                log::info!(
                    "Frame {}: player at ({:.2}, {:.2}) moving ({:.2}, {:.2}), {} bodies",
                    frame,
                    pos.x,
                    pos.y,
                    vel.x,
                    vel.y,
                    level.scene.body_count()
                );
            }
        }
    }

    log::info!(
        "Simulation finished: {} collisions handled, {} gems, {} resets, spawn at ({:.1}, {:.1})",
        collisions,
        level.stats.gems.get(),
        level.stats.resets.get(),
        level.spawn.x,
        level.spawn.y
    );
    Ok(())
}
