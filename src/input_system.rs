use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

/// Discrete actions triggered by key presses
///
/// Steering is not an action: it is read from the held-key state once per
/// frame (see [`Steering::from_event_pump`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Space pressed this frame (auto-repeat ignored)
    Fire,
    TogglePause,
    ToggleHitboxes,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Round in progress
    Playing,
    /// Player paused the game
    Paused,
    /// Round won or lost, waiting for the restart
    RoundOver,
}

/// Horizontal steering from the arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steering {
    #[default]
    None,
    Left,
    Right,
}

impl Steering {
    /// Left wins when both arrows are held.
    pub fn from_held(left: bool, right: bool) -> Self {
        if left {
            Steering::Left
        } else if right {
            Steering::Right
        } else {
            Steering::None
        }
    }

    pub fn from_event_pump(event_pump: &EventPump) -> Self {
        let keyboard = event_pump.keyboard_state();
        Self::from_held(
            keyboard.is_scancode_pressed(Scancode::Left),
            keyboard.is_scancode_pressed(Scancode::Right),
        )
    }

    /// -1, 0 or 1
    pub fn direction(&self) -> f32 {
        match self {
            Steering::None => 0.0,
            Steering::Left => -1.0,
            Steering::Right => 1.0,
        }
    }
}

/// Everything the scene needs from the player for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub steering: Steering,
    pub fire: bool,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens in phases:
/// 1. Set the current InputContext from the scene state
/// 2. Poll SDL2 events
/// 3. Translate key presses to GameActions, filtered by context
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Pause takes priority over the round state: a paused round that has
    /// already ended still only accepts unpause and quit.
    pub fn update_context(&mut self, paused: bool, round_over: bool) {
        self.context = if paused {
            InputContext::Paused
        } else if round_over {
            InputContext::RoundOver
        } else {
            InputContext::Playing
        };
    }

    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => {
                    if let Some(action) = self.map_key(key, repeat) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Translates a single key press in the current context
    pub fn map_key(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        match key {
            Keycode::Escape => Some(GameAction::Quit),
            Keycode::B => Some(GameAction::ToggleHitboxes),
            Keycode::P if self.context != InputContext::RoundOver => Some(GameAction::TogglePause),
            Keycode::Space if !repeat && self.context == InputContext::Playing => {
                Some(GameAction::Fire)
            }
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
