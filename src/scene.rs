//! The shooter scene: one round of dodging and shooting falling rocks.
//!
//! # Lifecycle
//!
//! - [`ShooterScene::create`] sets up a fresh round and schedules the rock
//!   wave and countdown timers.
//! - [`ShooterScene::step`] runs one frame: timers, physics, overlap
//!   handlers, then player input.
//! - Ending a round (jet hit, or the countdown reaching zero) freezes the
//!   scene and schedules a restart, which replaces every piece of round state
//!   with a freshly created scene.
//!
//! The scene never touches SDL audio or the renderer directly. Sounds are
//! queued as [`SoundCue`]s for the caller to drain each frame.

use crate::collision::{check_collisions_with_collection, first_collision_in_collection};
use crate::config::GameConfig;
use crate::entities::{Bullet, Jet, Rock, RockLaunch, SpriteMetrics};
use crate::hud::{format_countdown, Label, StatusBanner, LOSE_COLOR, WIN_COLOR};
use crate::input_system::FrameInput;
use crate::physics::WorldBounds;
use crate::timer::SceneClock;
use rand::Rng;
use std::ops::ControlFlow;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
    Victory,
}

/// Audio requests produced by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Start the looping background track from the beginning
    StartMusic,
    StopMusic,
    /// Start the background track only if nothing is playing
    ResumeMusic,
    PauseMusic,
    UnpauseMusic,
    Gun,
    Explode,
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneEvent {
    RockWave,
    SpawnRock,
    CountdownTick,
    ResumeMusic,
    Restart,
}

pub struct ShooterScene {
    config: GameConfig,
    metrics: SpriteMetrics,
    world: WorldBounds,
    clock: SceneClock<SceneEvent>,
    state: SessionState,
    time_left: i32,
    rock_speed: f32,
    jet: Jet,
    rocks: Vec<Rock>,
    bullets: Vec<Bullet>,
    background_offset: f32,
    timer_label: Label,
    status: StatusBanner,
    sound_cues: Vec<SoundCue>,
    paused: bool,
    round: u32,
}

impl ShooterScene {
    pub fn create(config: &GameConfig, metrics: SpriteMetrics) -> Self {
        let world = WorldBounds::new(config.window.width, config.window.height);

        let mut clock = SceneClock::new();
        clock.add_loop(config.rocks.wave_interval_ms, SceneEvent::RockWave);
        clock.add_loop(1000, SceneEvent::CountdownTick);

        let status = StatusBanner::new(
            config.window.width as i32 / 2,
            config.window.height as i32 / 2,
        );

        ShooterScene {
            config: config.clone(),
            metrics,
            world,
            clock,
            state: SessionState::Playing,
            time_left: config.round.duration_secs,
            rock_speed: config.rocks.initial_speed,
            jet: Jet::new(&config.jet, metrics.jet),
            rocks: Vec::new(),
            bullets: Vec::new(),
            background_offset: 0.0,
            timer_label: Label::new(format_countdown(config.round.duration_secs), 10, 10, 24),
            status,
            sound_cues: vec![SoundCue::StartMusic],
            paused: false,
            round: 1,
        }
    }

    /// Advances the scene by one frame.
    pub fn step(&mut self, dt: Duration, input: FrameInput, rng: &mut impl Rng) {
        if self.paused {
            return;
        }

        let dt_ms = dt.as_micros() as f64 / 1000.0;
        for event in self.clock.advance(dt_ms) {
            if self.handle_event(event, rng).is_break() {
                return;
            }
        }

        self.step_physics(dt.as_secs_f32());
        self.resolve_bullet_hits();
        self.resolve_jet_hits();
        self.update(input);
        self.sweep();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.sound_cues.push(if self.paused {
            SoundCue::PauseMusic
        } else {
            SoundCue::UnpauseMusic
        });
        self.paused
    }

    /// Takes the sounds queued since the last call, oldest first.
    pub fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }

    pub fn spawn_rock(&mut self, launch: RockLaunch) {
        self.rocks.push(Rock::spawn(launch, self.metrics.rock));
    }

    #[allow(dead_code)] // Read by tests
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once the round has been won or lost
    pub fn is_frozen(&self) -> bool {
        self.state != SessionState::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[allow(dead_code)] // Read by tests
    pub fn time_left(&self) -> i32 {
        self.time_left
    }

    #[allow(dead_code)] // Read by tests
    pub fn rock_speed(&self) -> f32 {
        self.rock_speed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn jet(&self) -> &Jet {
        &self.jet
    }

    pub fn rocks(&self) -> &[Rock] {
        &self.rocks
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn background_offset(&self) -> f32 {
        self.background_offset
    }

    pub fn timer_label(&self) -> &Label {
        &self.timer_label
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    /// Breaks when the scene was replaced, so the rest of the old frame must
    /// not run.
    fn handle_event(&mut self, event: SceneEvent, rng: &mut impl Rng) -> ControlFlow<()> {
        match event {
            SceneEvent::RockWave => self.on_rock_wave(rng),
            SceneEvent::SpawnRock => {
                let launch = self.roll_launch(rng);
                self.spawn_rock(launch);
            }
            SceneEvent::CountdownTick => self.on_countdown_tick(),
            SceneEvent::ResumeMusic => self.sound_cues.push(SoundCue::ResumeMusic),
            SceneEvent::Restart => {
                self.restart();
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn on_rock_wave(&mut self, rng: &mut impl Rng) {
        if self.is_frozen() {
            return;
        }

        let rocks = &self.config.rocks;
        for _ in 0..rocks.per_wave {
            let delay = rng.gen_range(0..=rocks.spawn_jitter_ms);
            self.clock.delayed_call(delay, SceneEvent::SpawnRock);
        }
        log::debug!(
            "Rock wave at {:.0} ms ({} rocks, speed {})",
            self.clock.now_ms(),
            rocks.per_wave,
            self.rock_speed
        );
    }

    /// Rolls the launch of one rock. Fall speed is whatever the countdown has
    /// raised it to by now, not what it was when the wave started.
    fn roll_launch(&self, rng: &mut impl Rng) -> RockLaunch {
        let rocks = &self.config.rocks;
        RockLaunch {
            x: rng.gen_range(rocks.spawn_x_min..=rocks.spawn_x_max) as f32,
            y: rocks.spawn_y,
            fall_speed: self.rock_speed,
            drift_x: rng.gen_range(-rocks.drift_x..=rocks.drift_x) as f32,
            spin: rng.gen_range(-rocks.spin..=rocks.spin) as f32,
            hp: rocks.hp,
        }
    }

    fn on_countdown_tick(&mut self) {
        if self.is_frozen() {
            return;
        }

        self.time_left -= 1;
        self.rock_speed += self.config.rocks.speed_step;
        self.timer_label.text = format_countdown(self.time_left);

        if self.time_left <= 0 {
            self.end_round(SessionState::Victory);
        }
    }

    fn step_physics(&mut self, dt: f32) {
        let gravity_y = self.config.physics.gravity_y;
        let world = self.world;

        self.jet.body.step(dt, gravity_y, &world);
        for rock in self.rocks.iter_mut() {
            rock.body.step(dt, gravity_y, &world);
        }
        for bullet in self.bullets.iter_mut() {
            bullet.body.step(dt, gravity_y, &world);
        }
    }

    /// A bullet is spent on the first rock it touches. Rocks keep taking hits
    /// even after the round is over.
    fn resolve_bullet_hits(&mut self) {
        for bullet in self.bullets.iter_mut() {
            if let Some(index) = first_collision_in_collection(&*bullet, &self.rocks) {
                bullet.destroy();
                if self.rocks[index].hit() {
                    self.sound_cues.push(SoundCue::Explode);
                }
            }
        }
    }

    fn resolve_jet_hits(&mut self) {
        if self.is_frozen() {
            return;
        }
        if !check_collisions_with_collection(&self.jet, &self.rocks).is_empty() {
            self.end_round(SessionState::GameOver);
        }
    }

    /// Per-frame player control. Does nothing once the round is over.
    fn update(&mut self, input: FrameInput) {
        if self.is_frozen() || !self.jet.active {
            return;
        }

        self.background_offset -= 1.0;

        self.jet.body.velocity_x = input.steering.direction() * self.config.jet.speed;

        if input.fire {
            let (x, y) = self.jet.muzzle(self.config.bullet.muzzle_offset);
            self.bullets
                .push(Bullet::fire(x, y, &self.config.bullet, self.metrics.bullet));
            self.sound_cues.push(SoundCue::Gun);
        }

        self.jet.body.y = self.config.jet.y;
    }

    fn end_round(&mut self, outcome: SessionState) {
        self.state = outcome;
        self.jet.disable();
        for rock in self.rocks.iter_mut() {
            rock.body.freeze();
        }
        for bullet in self.bullets.iter_mut() {
            bullet.body.freeze();
        }

        let restart_delay = self.config.round.restart_delay_ms;
        self.sound_cues.push(SoundCue::StopMusic);

        match outcome {
            SessionState::Victory => {
                self.status.show("You Win", WIN_COLOR);
                self.sound_cues.push(SoundCue::Win);
                self.clock.delayed_call(restart_delay, SceneEvent::ResumeMusic);
            }
            SessionState::GameOver => {
                self.status.show("Game Over", LOSE_COLOR);
                self.sound_cues.push(SoundCue::Lose);
            }
            SessionState::Playing => {}
        }
        self.clock.delayed_call(restart_delay, SceneEvent::Restart);

        log::info!(
            "Round {} over: {:?} with {} s left",
            self.round,
            outcome,
            self.time_left
        );
    }

    fn sweep(&mut self) {
        let world = self.world;
        self.rocks
            .retain(|rock| !rock.is_destroyed() && !rock.is_offscreen(&world));
        self.bullets
            .retain(|bullet| !bullet.is_destroyed() && !bullet.is_offscreen());
    }

    /// Throws away the whole round and starts a new one. Sounds queued by the
    /// old round are kept ahead of the new round's music cue.
    fn restart(&mut self) {
        let carried_cues = std::mem::take(&mut self.sound_cues);
        let next_round = self.round + 1;
        log::info!(
            "Restarting scene for round {} ({} timers dropped)",
            next_round,
            self.clock.pending()
        );

        let mut fresh = ShooterScene::create(&self.config, self.metrics);
        fresh.round = next_round;
        fresh.sound_cues.splice(0..0, carried_cues);
        *self = fresh;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_system::Steering;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(50);

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.rocks.per_wave = 0;
        config
    }

    fn run_for(
        scene: &mut ShooterScene,
        millis: u64,
        input: FrameInput,
        rng: &mut StdRng,
        cues: &mut Vec<SoundCue>,
    ) {
        for _ in 0..millis / FRAME.as_millis() as u64 {
            scene.step(FRAME, input, rng);
            cues.extend(scene.drain_sound_cues());
        }
    }

    fn rock_on_jet() -> RockLaunch {
        RockLaunch {
            x: 230.0,
            y: 800.0,
            fall_speed: 0.0,
            drift_x: 0.0,
            spin: 0.0,
            hp: 3,
        }
    }

    #[test]
    fn test_create_starts_fresh_round() {
        let mut scene = ShooterScene::create(&GameConfig::default(), SpriteMetrics::default());

        assert_eq!(scene.state(), SessionState::Playing);
        assert_eq!(scene.time_left(), 120);
        assert_eq!(scene.rock_speed(), 100.0);
        assert_eq!(scene.timer_label().text, "Time: 2:00");
        assert!(!scene.status().is_visible());
        assert!(scene.rocks().is_empty());
        assert_eq!(scene.drain_sound_cues(), vec![SoundCue::StartMusic]);
    }

    #[test]
    fn test_countdown_ticks_and_speeds_up_rocks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());

        run_for(&mut scene, 5000, FrameInput::default(), &mut rng, &mut cues);

        assert_eq!(scene.time_left(), 115);
        assert_eq!(scene.rock_speed(), 110.0);
        assert_eq!(scene.timer_label().text, "Time: 1:55");
    }

    #[test]
    fn test_surviving_the_countdown_wins_and_restarts() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());

        run_for(&mut scene, 120_000, FrameInput::default(), &mut rng, &mut cues);

        assert_eq!(scene.state(), SessionState::Victory);
        assert_eq!(scene.status().text(), "You Win");
        assert_eq!(scene.status().label.color, WIN_COLOR);
        assert_eq!(scene.timer_label().text, "Time: 0:00");
        assert!(!scene.jet().visible);
        assert_eq!(&cues[cues.len() - 2..], &[SoundCue::StopMusic, SoundCue::Win]);

        cues.clear();
        run_for(&mut scene, 3000, FrameInput::default(), &mut rng, &mut cues);

        assert_eq!(scene.state(), SessionState::Playing);
        assert_eq!(scene.round(), 2);
        assert_eq!(scene.time_left(), 120);
        assert_eq!(cues, vec![SoundCue::ResumeMusic, SoundCue::StartMusic]);
    }

    #[test]
    fn test_wave_spawns_five_rocks_within_jitter() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&GameConfig::default(), SpriteMetrics::default());

        run_for(&mut scene, 1500, FrameInput::default(), &mut rng, &mut cues);
        assert!(scene.rocks().is_empty());

        run_for(&mut scene, 550, FrameInput::default(), &mut rng, &mut cues);
        assert_eq!(scene.rocks().len(), 5);
        for rock in scene.rocks() {
            assert_eq!(rock.hp, 3);
            assert!(rock.body.velocity_y >= 100.0);
        }
    }

    #[test]
    fn test_rolled_launch_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let scene = ShooterScene::create(&GameConfig::default(), SpriteMetrics::default());

        for _ in 0..500 {
            let launch = scene.roll_launch(&mut rng);
            assert!((50.0..=450.0).contains(&launch.x));
            assert!((-150.0..=150.0).contains(&launch.drift_x));
            assert!((-200.0..=200.0).contains(&launch.spin));
            assert_eq!(launch.y, -50.0);
            assert_eq!(launch.fall_speed, 100.0);
        }
    }

    #[test]
    fn test_fire_spawns_bullet_above_jet() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        scene.drain_sound_cues();

        let fire = FrameInput {
            steering: Steering::None,
            fire: true,
        };
        scene.step(FRAME, fire, &mut rng);

        assert_eq!(scene.bullets().len(), 1);
        let bullet = &scene.bullets()[0].body;
        assert_eq!((bullet.x, bullet.y), (230.0, 760.0));
        assert_eq!(bullet.velocity_y, -600.0);
        assert_eq!(scene.drain_sound_cues(), vec![SoundCue::Gun]);
    }

    #[test]
    fn test_three_bullets_destroy_a_rock() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        scene.spawn_rock(RockLaunch {
            y: 500.0,
            ..rock_on_jet()
        });

        let fire = FrameInput {
            steering: Steering::None,
            fire: true,
        };
        for _ in 0..3 {
            scene.step(FRAME, fire, &mut rng);
            cues.extend(scene.drain_sound_cues());
        }
        run_for(&mut scene, 1000, FrameInput::default(), &mut rng, &mut cues);

        assert!(scene.rocks().is_empty());
        assert!(scene.bullets().is_empty());
        assert_eq!(scene.state(), SessionState::Playing);
        assert_eq!(cues.iter().filter(|c| **c == SoundCue::Gun).count(), 3);
        assert_eq!(cues.iter().filter(|c| **c == SoundCue::Explode).count(), 1);
    }

    #[test]
    fn test_rock_hitting_jet_ends_round_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&GameConfig::default(), SpriteMetrics::default());
        scene.drain_sound_cues();
        scene.spawn_rock(rock_on_jet());

        run_for(&mut scene, 1000, FrameInput::default(), &mut rng, &mut cues);

        assert_eq!(scene.state(), SessionState::GameOver);
        assert_eq!(scene.status().text(), "Game Over");
        assert_eq!(scene.status().label.color, LOSE_COLOR);
        assert!(!scene.jet().active);
        assert_eq!(cues, vec![SoundCue::StopMusic, SoundCue::Lose]);
        let rock = &scene.rocks()[0].body;
        assert_eq!((rock.velocity_x, rock.velocity_y), (0.0, 0.0));
        assert!(!rock.allow_gravity);
    }

    #[test]
    fn test_frozen_round_ignores_input_and_waves() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&GameConfig::default(), SpriteMetrics::default());
        scene.spawn_rock(rock_on_jet());
        scene.step(FRAME, FrameInput::default(), &mut rng);
        assert!(scene.is_frozen());

        let offset = scene.background_offset();
        let mash = FrameInput {
            steering: Steering::Right,
            fire: true,
        };
        run_for(&mut scene, 2500, mash, &mut rng, &mut cues);

        assert!(scene.bullets().is_empty());
        assert!(!cues.contains(&SoundCue::Gun));
        assert_eq!(scene.background_offset(), offset);
        assert_eq!(scene.rocks().len(), 1);
        assert_eq!(scene.time_left(), 120);
    }

    #[test]
    fn test_game_over_restarts_after_delay() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        scene.spawn_rock(rock_on_jet());
        scene.step(FRAME, FrameInput::default(), &mut rng);
        scene.drain_sound_cues();

        run_for(&mut scene, 3000, FrameInput::default(), &mut rng, &mut cues);

        assert_eq!(scene.state(), SessionState::Playing);
        assert_eq!(scene.round(), 2);
        assert!(scene.rocks().is_empty());
        assert!(scene.jet().active);
        assert!(!scene.status().is_visible());
        assert_eq!(cues, vec![SoundCue::StartMusic]);
    }

    #[test]
    fn test_jet_stays_inside_canvas() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());

        let left = FrameInput {
            steering: Steering::Left,
            fire: false,
        };
        run_for(&mut scene, 2000, left, &mut rng, &mut cues);

        let jet = scene.jet();
        assert!(jet.body.body_box().left.abs() < 1e-3);
        assert_eq!(jet.body.y, 800.0);
        assert!(scene.background_offset() < 0.0);
    }

    #[test]
    fn test_jet_stays_inside_right_edge() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());

        let right = FrameInput {
            steering: Steering::Right,
            fire: false,
        };
        run_for(&mut scene, 2000, right, &mut rng, &mut cues);

        let hitbox = scene.jet().body.body_box();
        assert!((hitbox.right() - 500.0).abs() < 1e-3);
        assert_eq!(scene.jet().body.y, 800.0);
    }

    #[test]
    fn test_delayed_spawn_uses_speed_at_spawn_time() {
        let mut config = GameConfig::default();
        config.rocks.wave_interval_ms = 1000;
        config.rocks.spawn_jitter_ms = 0;
        let mut rng = StdRng::seed_from_u64(13);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&config, SpriteMetrics::default());

        // The wave and the first countdown tick both fall due at 1000 ms. The
        // wave fires first, so its spawns run after the tick has raised the speed.
        run_for(&mut scene, 1000, FrameInput::default(), &mut rng, &mut cues);
        assert!(scene.rocks().is_empty());
        assert_eq!(scene.rock_speed(), 102.0);

        scene.step(FRAME, FrameInput::default(), &mut rng);
        assert_eq!(scene.rocks().len(), 5);

        let after_one_frame = 102.0 + config.physics.gravity_y * FRAME.as_secs_f32();
        for rock in scene.rocks() {
            assert_eq!(rock.body.velocity_y, after_one_frame);
        }
    }

    #[test]
    fn test_frozen_bullets_still_break_rocks() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        let fire = FrameInput {
            steering: Steering::None,
            fire: true,
        };
        scene.step(FRAME, fire, &mut rng);
        scene.spawn_rock(rock_on_jet());
        scene.step(FRAME, FrameInput::default(), &mut rng);
        assert_eq!(scene.state(), SessionState::GameOver);
        scene.drain_sound_cues();

        let bullet = scene.bullets()[0].body.clone();
        assert_eq!(bullet.velocity_y, 0.0);
        scene.spawn_rock(RockLaunch {
            x: bullet.x,
            y: bullet.y,
            hp: 1,
            ..rock_on_jet()
        });
        scene.step(FRAME, FrameInput::default(), &mut rng);

        assert!(scene.bullets().is_empty());
        assert_eq!(scene.rocks().len(), 1);
        assert_eq!(scene.drain_sound_cues(), vec![SoundCue::Explode]);
        assert_eq!(scene.state(), SessionState::GameOver);
    }

    #[test]
    fn test_bullets_culled_above_margin() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        let fire = FrameInput {
            steering: Steering::None,
            fire: true,
        };
        scene.step(FRAME, fire, &mut rng);

        // Past the top edge but still inside the margin
        run_for(&mut scene, 1400, FrameInput::default(), &mut rng, &mut cues);
        assert_eq!(scene.bullets().len(), 1);
        assert!(scene.bullets()[0].body.y < 0.0);

        run_for(&mut scene, 500, FrameInput::default(), &mut rng, &mut cues);
        assert!(scene.bullets().is_empty());
    }

    #[test]
    fn test_rocks_culled_outside_canvas() {
        let mut rng = StdRng::seed_from_u64(16);
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        scene.spawn_rock(RockLaunch {
            x: 250.0,
            y: 1200.0,
            ..rock_on_jet()
        });
        scene.spawn_rock(RockLaunch {
            x: -400.0,
            y: 300.0,
            ..rock_on_jet()
        });
        scene.spawn_rock(RockLaunch {
            x: 250.0,
            y: -50.0,
            ..rock_on_jet()
        });

        scene.step(FRAME, FrameInput::default(), &mut rng);

        assert_eq!(scene.rocks().len(), 1);
        assert!(scene.rocks()[0].body.y < 0.0);
    }

    #[test]
    fn test_pause_stops_the_clock() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cues = Vec::new();
        let mut scene = ShooterScene::create(&quiet_config(), SpriteMetrics::default());
        scene.drain_sound_cues();

        assert!(scene.toggle_pause());
        run_for(&mut scene, 5000, FrameInput::default(), &mut rng, &mut cues);
        assert_eq!(scene.time_left(), 120);
        assert_eq!(cues, vec![SoundCue::PauseMusic]);

        assert!(!scene.toggle_pause());
        run_for(&mut scene, 1000, FrameInput::default(), &mut rng, &mut cues);
        assert_eq!(scene.time_left(), 119);
    }
}
