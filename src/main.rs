//! Zombie Survival headless entry point
//!
//! Runs the simulation in real time with a scripted player and logs the HUD.
//! Usage: `zombie-survival [config.json]` (set `RUST_LOG=info` to see output).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use zombie_survival::sim::PlayerCommand;
    use zombie_survival::{GameConfig, GameLoop, LogRenderer};

    /// How long the demo plays before closing (ticks)
    const DEMO_TICKS: u64 = 60 * 60;

    env_logger::init();
    log::info!("Zombie Survival (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or(0);

    let mut game = match GameLoop::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    let mut renderer = LogRenderer::new(60);
    let interval = game.tick_interval();
    game.start();

    let mut last = Instant::now();
    let mut next_frame = last + interval;
    while game.is_running() {
        // Autopilot: stand still and fire whenever the cooldown allows
        game.handle_input(PlayerCommand::Fire);

        let now = Instant::now();
        game.advance(now - last, &mut renderer);
        last = now;

        if game.state().is_some_and(|s| s.time_ticks >= DEMO_TICKS) {
            game.stop();
            break;
        }

        next_frame += interval;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > interval * 2 {
            // Too far behind: resync instead of bursting
            next_frame = now;
        }
    }

    if let Some(snapshot) = game.snapshot() {
        match snapshot.to_json() {
            Ok(json) => log::debug!("Final snapshot: {json}"),
            Err(err) => log::warn!("Could not serialize final snapshot: {err}"),
        }
        log::info!(
            "Reached wave {} with {} zombies left after {} ticks",
            snapshot.wave,
            snapshot.live_enemies,
            snapshot.tick
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host yet; the library is driven by the embedding page
}
