use crate::scene::ConsoleRenderer;
use crate::scene::HeadlessScene;
use roadster::anyhow::Result;
use roadster::app::DriveApp;
use roadster::glam::Vec3;
use roadster::instant::Instant;
use roadster::log::info;
use roadster::log::Level;
use roadster::simulation::vehicle::StepOutcome;
use roadster::simulation::VehicleConfig;
use roadster::utils::settings::SettingsStorage;
use roadster::world::Course;
use roadster::world::Obstacle;
use std::env;
use std::fs;
use std::time::Duration;

pub mod scene;
pub mod script;

const TOTAL_FRAMES: u32 = 500;
const MODEL_LOAD_FRAMES: u32 = 30;
const FRAME_TIME_MS: u64 = 16;
const SETTINGS_PATH: &str = "./data/settings.cfg";
const SCRIPT_PATH: &str = "./data/drive.script";

fn main() {
    if let Err(err) = main_internal() {
        println!("Fatal error: {}", err);
    }
}

fn main_internal() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let config = VehicleConfig::from_settings(&mut SettingsStorage::new(SETTINGS_PATH))?;
    let source = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => fs::read_to_string(SCRIPT_PATH).unwrap_or_else(|_| script::DEFAULT_SCRIPT.to_string()),
    };
    let events = script::parse(&source);

    let mut app = DriveApp::new(config);
    let mut scene = HeadlessScene::new(build_course(), MODEL_LOAD_FRAMES);
    let mut renderer = ConsoleRenderer::default();

    info!("Freeride demo, {} scripted events over {} frames", events.len(), TOTAL_FRAMES);

    let start = Instant::now();
    let mut pending = events.as_slice();
    let mut collisions = 0;
    let mut respawns = 0;

    for frame in 0..TOTAL_FRAMES {
        scene.poll_model();

        while let Some(event) = pending.first().filter(|event| event.frame <= frame) {
            app.input(event.event);
            pending = &pending[1..];
        }

        let now = start + Duration::from_millis(frame as u64 * FRAME_TIME_MS);
        let report = app.frame(&mut scene, &mut renderer, now);

        match report.outcome {
            Some(StepOutcome::Collided { .. }) => collisions += 1,
            Some(StepOutcome::Respawned) => respawns += 1,
            _ => {}
        }

        if report.menu_toggles > 0 {
            info!("Menu toggled {} time(s) on frame {}", report.menu_toggles, frame);
        }
    }

    if let Some(state) = app.vehicle() {
        info!("Drive finished at {}, heading {:.2}, speed {:.2}", state.position, state.heading, state.speed);
    }

    info!("{} collisions, {} respawns, {} frames rendered, {} exhaust particles live", collisions, respawns, renderer.frames, scene.particles.len());

    Ok(())
}

// The spawn sits ten units inside the rear boundary, so reversing off the start line respawns quickly
fn build_course() -> Course {
    let mut course = Course::new(200.0, Vec3::new(0.0, 0.0, -190.0));

    // Tree lines along both sides of the start straight
    for i in 0..8 {
        let z = -175.0 + i as f32 * 12.0;
        course.obstacles.push(Obstacle::new(Vec3::new(-9.0, 0.0, z), 1.5));
        course.obstacles.push(Obstacle::new(Vec3::new(9.0, 0.0, z), 1.5));
    }

    // A parked hauler right on the racing line
    course.obstacles.push(Obstacle::new(Vec3::new(0.0, 0.0, -40.0), 2.5));

    // Fence posts around the far turn, all well off the straight
    for i in 0..6 {
        let angle = 0.5 + i as f32 * 0.35;
        course.obstacles.push(Obstacle::new(Vec3::new(angle.sin() * 30.0, 0.0, -10.0 + angle.cos() * 6.0), 0.8));
    }

    course
}
