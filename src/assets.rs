//! Asset paths and texture loading
//!
//! Art and audio are not shipped with the crate. Before running, place the
//! game's files under `assets/` next to `assets/config/`:
//!
//! ```text
//! assets/image/background.jpg  jet.png  rock.png  bullet.png
//! assets/music/bgm.mp3  gun.mp3  win.mp3  lose.mp3  explode.mp3
//! ```
//!
//! A missing image stops start-up with a `GameError::Asset` naming the file.
//! Missing audio only logs a warning and the game runs silent.

use crate::entities::SpriteMetrics;
use crate::error::GameError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

pub const ASSET_ROOT: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAsset {
    Background,
    Jet,
    Rock,
    Bullet,
}

impl ImageAsset {
    pub fn file_name(&self) -> &'static str {
        match self {
            ImageAsset::Background => "background.jpg",
            ImageAsset::Jet => "jet.png",
            ImageAsset::Rock => "rock.png",
            ImageAsset::Bullet => "bullet.png",
        }
    }

    pub fn path(&self) -> String {
        format!("{}/image/{}", ASSET_ROOT, self.file_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioAsset {
    Music,
    Gun,
    Win,
    Lose,
    Explode,
}

impl AudioAsset {
    pub const EFFECTS: [AudioAsset; 4] = [
        AudioAsset::Gun,
        AudioAsset::Win,
        AudioAsset::Lose,
        AudioAsset::Explode,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            AudioAsset::Music => "bgm.mp3",
            AudioAsset::Gun => "gun.mp3",
            AudioAsset::Win => "win.mp3",
            AudioAsset::Lose => "lose.mp3",
            AudioAsset::Explode => "explode.mp3",
        }
    }

    pub fn path(&self) -> String {
        format!("{}/music/{}", ASSET_ROOT, self.file_name())
    }
}

/// Loads a texture, naming the file in the error on failure
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    asset: ImageAsset,
) -> Result<Texture<'a>, GameError> {
    let path = asset.path();
    texture_creator
        .load_texture(&path)
        .map_err(|reason| GameError::Asset { path, reason })
}

pub struct Textures<'a> {
    pub background: Texture<'a>,
    pub jet: Texture<'a>,
    pub rock: Texture<'a>,
    pub bullet: Texture<'a>,
}

impl<'a> Textures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, GameError> {
        let textures = Textures {
            background: load_texture(texture_creator, ImageAsset::Background)?,
            jet: load_texture(texture_creator, ImageAsset::Jet)?,
            rock: load_texture(texture_creator, ImageAsset::Rock)?,
            bullet: load_texture(texture_creator, ImageAsset::Bullet)?,
        };
        log::info!("Loaded textures: {:?}", textures.metrics());
        Ok(textures)
    }

    /// Frame sizes as loaded, used to size the physics hitboxes
    pub fn metrics(&self) -> SpriteMetrics {
        let size = |texture: &Texture| {
            let query = texture.query();
            (query.width, query.height)
        };
        SpriteMetrics {
            jet: size(&self.jet),
            rock: size(&self.rock),
            bullet: size(&self.bullet),
        }
    }
}
