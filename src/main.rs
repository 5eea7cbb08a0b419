mod assets;
mod audio;
mod collision;
mod config;
mod entities;
mod error;
mod hud;
mod input_system;
mod physics;
mod render;
mod scene;
mod text;
mod timer;

use assets::Textures;
use audio::AudioSystem;
use config::GameConfig;
use error::GameError;
use input_system::{FrameInput, GameAction, InputSystem, Steering};
use render::render_scene;
use scene::ShooterScene;
use std::time::{Duration, Instant};

/// Longest frame the simulation will step in one go. Stalls (window drags,
/// breakpoints) beyond this are dropped rather than integrated.
const MAX_FRAME_TIME: Duration = Duration::from_millis(50);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let (config, source) = GameConfig::load()?;
    match source {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("No config file found, using defaults"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let (width, height) = (config.window.width, config.window.height);
    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let textures = Textures::load(&texture_creator)?;
    let audio = AudioSystem::open(&sdl_context, &config.audio);
    let mut event_pump = sdl_context.event_pump()?;

    let mut rng = rand::thread_rng();
    let mut scene = ShooterScene::create(&config, textures.metrics());
    let mut input = InputSystem::new();
    let mut show_hitboxes = config.physics.debug;

    let frame_budget = Duration::from_secs(1) / config.window.fps_cap.max(1);
    let mut last_frame = Instant::now();

    log::info!("Controls: Left/Right steer, Space fire, P pause, B hitboxes, Esc quit");

    'running: loop {
        input.update_context(scene.is_paused(), scene.is_frozen());

        let mut fire = false;
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Fire => fire = true,
                GameAction::TogglePause => {
                    let paused = scene.toggle_pause();
                    log::info!("{}", if paused { "Paused" } else { "Resumed" });
                }
                GameAction::ToggleHitboxes => {
                    show_hitboxes = !show_hitboxes;
                    log::debug!("Hitbox overlay: {}", show_hitboxes);
                }
            }
        }

        let frame_input = FrameInput {
            steering: Steering::from_event_pump(&event_pump),
            fire,
        };

        let frame_start = Instant::now();
        let dt = (frame_start - last_frame).min(MAX_FRAME_TIME);
        last_frame = frame_start;

        scene.step(dt, frame_input, &mut rng);
        audio.play_all(scene.drain_sound_cues());

        render_scene(&mut canvas, &textures, &scene, show_hitboxes)?;
        canvas.present();

        let spent = frame_start.elapsed();
        if spent < frame_budget {
            std::thread::sleep(frame_budget - spent);
        }
    }

    log::info!("Exiting after {} round(s)", scene.round());
    Ok(())
}
