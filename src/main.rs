//! NeoClassic Balls entry point
//!
//! Headless driver: runs the engine without a window, feeding it scripted
//! frames and mouse actions, and reports what happened. Pass a settings JSON
//! path as the first argument to override the defaults.

use glam::Vec2;

use neoclassic_balls::sim::{DeleteZone, GameEvent, GameLogic, Rgb, SpitOptions, spawn_rng};
use neoclassic_balls::{FrameClock, Settings};

/// Number of random balls in the scripted session
const SESSION_BALLS: usize = 12;
/// Rendered frames in the scripted session
const SESSION_FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("NeoClassic Balls (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Failed to load settings from {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    run_demo();
    run_session(&settings);
}

/// Two balls drift into each other, get sucked up, and one is spat back out
fn run_demo() {
    let mut logic = GameLogic::new(800.0, 600.0, DeleteZone::new(0.0, 560.0, 200.0, 600.0));

    logic.create_ball(Vec2::new(100.0, 100.0), Vec2::new(50.0, 0.0), 20.0, Rgb::RED);
    logic.create_ball(Vec2::new(200.0, 100.0), Vec2::new(-50.0, 0.0), 20.0, Rgb::BLUE);

    for _ in 0..60 {
        logic.update(1.0 / 60.0);
    }

    let sucked = logic.suck_balls_with_mouse(Vec2::new(150.0, 100.0), None, None);
    println!("Sucked balls: {}", sucked.len());

    if !sucked.is_empty() {
        let spat = logic.spit_ball_from_inventory(Vec2::new(400.0, 300.0), SpitOptions::toward(Vec2::X));
        match spat.and_then(|id| logic.ball(id)) {
            Some(ball) => println!("Spat ball {} with color {:?}", ball.id, ball.color.to_array()),
            None => println!("Nothing to spit"),
        }
    }
}

/// Seeded random session driven through the fixed-step clock
fn run_session(settings: &Settings) {
    let mut logic = GameLogic::from_settings(settings).with_events();
    let mut rng = spawn_rng(settings.seed);
    let mut clock = FrameClock::new(settings.sim_dt, settings.max_substeps);

    for _ in 0..SESSION_BALLS {
        logic.spawn_random_ball(&settings.spawn, &mut rng);
    }

    let center = Vec2::new(settings.world_width / 2.0, settings.world_height / 2.0);
    let (mut mixes, mut bounces, mut deleted) = (0usize, 0usize, 0usize);

    for frame in 0..SESSION_FRAMES {
        // Uneven frame pacing, as a real display loop would produce
        let frame_dt = if frame % 3 == 0 { 1.0 / 30.0 } else { 1.0 / 60.0 };
        for _ in 0..clock.advance(frame_dt) {
            logic.update(clock.step());
        }

        // Hold right button every 90 frames, click left every 150
        if frame % 90 == 0 {
            logic.suck_balls_with_mouse(center, None, None);
        }
        if frame % 150 == 0 {
            let options = SpitOptions::toward(settings.spit_direction);
            logic.spit_ball_from_inventory(center, options);
        }

        for event in logic.drain_events() {
            match event {
                GameEvent::ColorsMixed { .. } => mixes += 1,
                GameEvent::WallBounce { .. } => bounces += 1,
                GameEvent::Deleted { .. } => deleted += 1,
                _ => {}
            }
            log::trace!("Frame {}: {:?} ({})", frame, event, event.ball_id());
        }
    }

    log::info!(
        "Session done after {} ticks: world={}, inventory={}, deleted={}, mixes={}, bounces={}",
        logic.time_ticks,
        logic.balls().len(),
        logic.inventory().len(),
        deleted,
        mixes,
        bounces
    );
    println!(
        "Session: {} in world, {} in inventory, {} deleted",
        logic.balls().len(),
        logic.inventory().len(),
        deleted
    );
}
