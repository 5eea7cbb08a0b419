//! Error types for Rockfall
//!
//! SDL itself reports failures as plain strings, so those are wrapped as
//! `GameError::Sdl`. Everything the crate does on top of SDL (asset loading,
//! config files) gets its own variant.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// An SDL subsystem call failed
    Sdl(String),

    /// An image or audio file could not be loaded
    Asset { path: String, reason: String },

    /// Reading a config file failed
    Io(std::io::Error),

    /// A config file is not valid JSON for `GameConfig`
    Config(serde_json::Error),

    /// A config file parsed but describes values the game cannot run with
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            GameError::Asset { path, reason } => {
                write!(f, "Failed to load {}: {}", path, reason)
            }
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::Config(e) => write!(f, "Invalid config: {}", e),
            GameError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<String> for GameError {
    fn from(msg: String) -> Self {
        GameError::Sdl(msg)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err)
    }
}
