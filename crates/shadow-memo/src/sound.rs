//! The burn audio cue.
//!
//! Playback is fire-and-forget: it never blocks the event loop and every
//! failure is logged at debug level and dropped. With the `sound` feature
//! the configured WAV file is played through the default output device;
//! without it, or when the file is missing, the terminal bell stands in.

use std::io::{self, Write};
#[cfg(feature = "sound")]
use std::path::PathBuf;

use tracing::debug;

use crate::config::SoundConfig;
#[cfg(feature = "sound")]
use crate::error::MemoError;

pub trait BurnCue {
    fn play(&self);
}

pub struct SilentCue;

impl BurnCue for SilentCue {
    fn play(&self) {}
}

pub struct BellCue;

impl BurnCue for BellCue {
    fn play(&self) {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!(error = %err, "terminal bell failed");
        }
    }
}

#[cfg(feature = "sound")]
pub struct WavCue {
    path: PathBuf,
}

#[cfg(feature = "sound")]
impl BurnCue for WavCue {
    fn play(&self) {
        let path = self.path.clone();
        std::thread::spawn(move || {
            if let Err(err) = play_wav(&path) {
                debug!(path = %path.display(), error = %err, "burn sound failed");
            }
        });
    }
}

#[cfg(feature = "sound")]
fn play_wav(path: &std::path::Path) -> Result<(), MemoError> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path)?;
    // The stream must outlive playback, so it stays on this thread.
    let (_stream, handle) =
        rodio::OutputStream::try_default().map_err(|err| MemoError::Audio(err.to_string()))?;
    let sink = rodio::Sink::try_new(&handle).map_err(|err| MemoError::Audio(err.to_string()))?;
    let source =
        rodio::Decoder::new(BufReader::new(file)).map_err(|err| MemoError::Audio(err.to_string()))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

/// Startup footer note for a configured WAV this build cannot play.
pub fn playback_note(config: &SoundConfig) -> Option<&'static str> {
    if cfg!(feature = "sound") || !config.enabled || !config.path.is_file() {
        return None;
    }
    Some("No audio in this build: burns ring the terminal bell.")
}

pub fn cue_from_config(config: &SoundConfig) -> Box<dyn BurnCue> {
    if !config.enabled {
        return Box::new(SilentCue);
    }
    #[cfg(feature = "sound")]
    {
        if config.path.is_file() {
            return Box::new(WavCue {
                path: config.path.clone(),
            });
        }
        debug!(path = %config.path.display(), "burn sound missing, using terminal bell");
        Box::new(BellCue)
    }
    #[cfg(not(feature = "sound"))]
    {
        debug!(path = %config.path.display(), "built without audio, using terminal bell");
        Box::new(BellCue)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{cue_from_config, playback_note, BurnCue};
    use crate::config::SoundConfig;

    fn wav_config(dir: &TempDir, enabled: bool) -> SoundConfig {
        let path = dir.path().join("burn.wav");
        fs::write(&path, b"RIFF").expect("write wav");
        SoundConfig { enabled, path }
    }

    #[cfg(not(feature = "sound"))]
    #[test]
    fn configured_wav_without_audio_support_is_announced() {
        let dir = TempDir::new().expect("temp dir");
        assert!(playback_note(&wav_config(&dir, true)).is_some());
        assert_eq!(playback_note(&wav_config(&dir, false)), None);
    }

    #[cfg(feature = "sound")]
    #[test]
    fn audio_builds_have_nothing_to_announce() {
        let dir = TempDir::new().expect("temp dir");
        assert_eq!(playback_note(&wav_config(&dir, true)), None);
    }

    #[test]
    fn missing_wav_needs_no_note() {
        let config = SoundConfig {
            enabled: true,
            path: PathBuf::from("/definitely/not/here.wav"),
        };
        assert_eq!(playback_note(&config), None);
    }

    #[cfg(feature = "sound")]
    #[test]
    fn missing_wav_reports_io_error() {
        use crate::error::MemoError;

        let missing = PathBuf::from("/definitely/not/here.wav");
        let err = super::play_wav(&missing).unwrap_err();
        assert!(matches!(err, MemoError::Io(_)));
    }

    #[test]
    fn disabled_sound_builds_a_cue_without_touching_the_path() {
        let config = SoundConfig {
            enabled: false,
            path: PathBuf::from("/definitely/not/here.wav"),
        };
        // Playing the silent cue must be a no-op.
        cue_from_config(&config).play();
    }
}
