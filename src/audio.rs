//! Music and sound effects through SDL2_mixer
//!
//! Audio is optional: if the device cannot be opened or a clip fails to load,
//! the game logs a warning and carries on silently.

use crate::assets::AudioAsset;
use crate::config::AudioConfig;
use crate::error::GameError;
use crate::scene::SoundCue;
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS};
use sdl2::{AudioSubsystem, Sdl};
use std::collections::HashMap;

const SAMPLE_RATE: i32 = 44_100;
const CHUNK_SIZE: i32 = 1_024;
const MIXING_CHANNELS: i32 = 16;

/// What the mixer should do for a cue, given whether music is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    PlayMusic,
    StopMusic,
    PauseMusic,
    UnpauseMusic,
    Effect(AudioAsset),
    Nothing,
}

pub fn plan(cue: SoundCue, music_playing: bool) -> Playback {
    match cue {
        SoundCue::StartMusic => Playback::PlayMusic,
        SoundCue::ResumeMusic if music_playing => Playback::Nothing,
        SoundCue::ResumeMusic => Playback::PlayMusic,
        SoundCue::StopMusic => Playback::StopMusic,
        SoundCue::PauseMusic => Playback::PauseMusic,
        SoundCue::UnpauseMusic => Playback::UnpauseMusic,
        SoundCue::Gun => Playback::Effect(AudioAsset::Gun),
        SoundCue::Explode => Playback::Effect(AudioAsset::Explode),
        SoundCue::Win => Playback::Effect(AudioAsset::Win),
        SoundCue::Lose => Playback::Effect(AudioAsset::Lose),
    }
}

fn to_mixer_volume(volume: f32) -> i32 {
    (volume.clamp(0.0, 1.0) * mixer::MAX_VOLUME as f32).round() as i32
}

struct SoundBank {
    _audio: AudioSubsystem,
    _mixer: Sdl2MixerContext,
    music: Music<'static>,
    effects: HashMap<AudioAsset, Chunk>,
}

impl SoundBank {
    fn open(sdl_context: &Sdl, config: &AudioConfig) -> Result<Self, GameError> {
        let audio = sdl_context.audio()?;
        mixer::open_audio(SAMPLE_RATE, AUDIO_S16LSB, DEFAULT_CHANNELS, CHUNK_SIZE)?;
        let mixer_context = mixer::init(InitFlag::MP3)?;
        mixer::allocate_channels(MIXING_CHANNELS);

        let music_path = AudioAsset::Music.path();
        let music = Music::from_file(&music_path).map_err(|reason| GameError::Asset {
            path: music_path,
            reason,
        })?;
        Music::set_volume(to_mixer_volume(config.music_volume));

        let mut effects = HashMap::new();
        for asset in AudioAsset::EFFECTS {
            let path = asset.path();
            let mut chunk = Chunk::from_file(&path)
                .map_err(|reason| GameError::Asset { path, reason })?;
            chunk.set_volume(to_mixer_volume(config.effects_volume));
            effects.insert(asset, chunk);
        }

        Ok(SoundBank {
            _audio: audio,
            _mixer: mixer_context,
            music,
            effects,
        })
    }

    fn apply(&self, playback: Playback) {
        let result = match playback {
            Playback::PlayMusic => self.music.play(-1),
            Playback::StopMusic => {
                Music::halt();
                Ok(())
            }
            Playback::PauseMusic => {
                Music::pause();
                Ok(())
            }
            Playback::UnpauseMusic => {
                Music::resume();
                Ok(())
            }
            Playback::Effect(asset) => match self.effects.get(&asset) {
                Some(chunk) => Channel::all().play(chunk, 0).map(|_| ()),
                None => Ok(()),
            },
            Playback::Nothing => Ok(()),
        };

        if let Err(e) = result {
            log::warn!("Audio playback failed for {:?}: {}", playback, e);
        }
    }
}

/// Plays scene sound cues, or swallows them if audio is unavailable
pub struct AudioSystem {
    bank: Option<SoundBank>,
}

impl AudioSystem {
    pub fn open(sdl_context: &Sdl, config: &AudioConfig) -> Self {
        match SoundBank::open(sdl_context, config) {
            Ok(bank) => {
                log::info!("Audio ready");
                AudioSystem { bank: Some(bank) }
            }
            Err(e) => {
                log::warn!("Audio unavailable, running silent: {}", e);
                AudioSystem { bank: None }
            }
        }
    }

    pub fn play_all(&self, cues: impl IntoIterator<Item = SoundCue>) {
        let Some(bank) = &self.bank else {
            return;
        };
        for cue in cues {
            bank.apply(plan(cue, Music::is_playing()));
        }
    }
}
