//! Headless demo runner
//!
//! Drives the simulation with a scripted pilot for a fixed number of ticks
//! and reports the outcome. Useful for smoke-testing tuning changes without
//! a renderer attached; a real front end would sample its input device into
//! the `TickInput` instead.

use driftfield::SimConfig;
use driftfield::consts::{INIT_VIEWPORT_HEIGHT, INIT_VIEWPORT_WIDTH};
use driftfield::sim::{SimState, TemplateLibrary, TickInput, Viewport, tick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs(),
    };
    let ticks: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 3600,
    };

    let config = SimConfig::load("driftfield.json");
    let templates = TemplateLibrary::builtin()?;
    let viewport = Viewport::new(INIT_VIEWPORT_WIDTH, INIT_VIEWPORT_HEIGHT);
    let mut state = SimState::new(&config, seed);

    log::info!("Driftfield demo: seed {seed}, {ticks} ticks");

    for t in 0..ticks {
        // Scripted pilot: cruise forward, sweep right, fire in bursts
        let input = TickInput {
            thrust_forward: t % 90 < 60,
            turn_right: t % 240 < 40,
            fire: t % 15 == 0,
            ..Default::default()
        };
        tick(&mut state, &input, &config, &templates);

        if t % 600 == 0 {
            let screen = viewport.field_to_screen(state.craft.pos, state.craft.pos);
            log::info!(
                "tick {t}: craft ({:.0}, {:.0}) screen ({:.0}, {:.0}), speed {:.2}, \
                 {} projectiles, {} obstacles, score {}",
                state.craft.pos.x,
                state.craft.pos.y,
                screen.x,
                screen.y,
                state.craft.speed,
                state.projectiles.len(),
                state.obstacles.len(),
                state.score,
            );
        }
    }

    println!(
        "seed {seed}: {} ticks, final score {}, craft at ({:.1}, {:.1})",
        state.time_ticks, state.score, state.craft.pos.x, state.craft.pos.y
    );
    Ok(())
}
