//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local file taking precedence:
//! 1. User-level: `$XDG_CONFIG_HOME/shadow-memo/config.toml`
//!    (falls back to `~/.config/shadow-memo/config.toml`)
//! 2. Local: `<cwd>/.shadow-memo/config.toml`
//!
//! Supports the memo variant, idle timeout, burn sound and keymap.
//! Missing or malformed files fall back to defaults. Uses TOML with serde.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::memo::{Variant, DEFAULT_CHAR_LIMIT};
use crate::pad::IDLE_TIMEOUT;

const DEFAULT_BURN: &str = "ctrl+b";
const DEFAULT_PASTE_IMAGE: &str = "ctrl+v";
const DEFAULT_DROP_IMAGE: &str = "ctrl+d";
const DEFAULT_QUIT: &str = "ctrl+q";
const DEFAULT_SOUND_PATH: &str = "sounds/burn.wav";

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct Config {
    pub memo: MemoConfig,
    pub sound: SoundConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone)]
pub struct MemoConfig {
    pub variant: Variant,
    /// `None` disables the idle burn.
    pub idle_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct SoundConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub burn: String,
    pub paste_image: String,
    pub drop_image: String,
    pub quit: String,
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    memo: Option<RawMemo>,
    sound: Option<RawSound>,
    keymap: Option<RawKeymap>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMemo {
    variant: Option<String>,
    #[serde(alias = "charLimit")]
    char_limit: Option<usize>,
    #[serde(alias = "idleTimeoutSecs")]
    idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSound {
    enabled: Option<bool>,
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    burn: Option<String>,
    #[serde(alias = "pasteImage")]
    paste_image: Option<String>,
    #[serde(alias = "dropImage")]
    drop_image: Option<String>,
    quit: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
            None
        }
    }
}

/// Pick a field from the local config, then the user config.
fn pick<T, S>(
    local: Option<&S>,
    user: Option<&S>,
    field: impl Fn(&S) -> Option<T>,
) -> Option<T> {
    local.and_then(&field).or_else(|| user.and_then(&field))
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_memo = local.as_ref().and_then(|c| c.memo.as_ref());
    let user_memo = user.as_ref().and_then(|c| c.memo.as_ref());
    let variant_name = pick(local_memo, user_memo, |m| m.variant.clone());
    let char_limit = pick(local_memo, user_memo, |m| m.char_limit)
        .unwrap_or(DEFAULT_CHAR_LIMIT)
        .max(1);
    let variant = parse_variant(variant_name.as_deref(), char_limit);
    let idle_timeout = match pick(local_memo, user_memo, |m| m.idle_timeout_secs) {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => Some(IDLE_TIMEOUT),
    };

    let local_sound = local.as_ref().and_then(|c| c.sound.as_ref());
    let user_sound = user.as_ref().and_then(|c| c.sound.as_ref());
    let enabled = pick(local_sound, user_sound, |s| s.enabled).unwrap_or(true);
    let path = pick(local_sound, user_sound, |s| s.path.clone())
        .unwrap_or_else(|| DEFAULT_SOUND_PATH.to_string());

    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let burn = pick(local_keymap, user_keymap, |k| k.burn.clone())
        .unwrap_or_else(|| DEFAULT_BURN.to_string());
    let paste_image = pick(local_keymap, user_keymap, |k| k.paste_image.clone())
        .unwrap_or_else(|| DEFAULT_PASTE_IMAGE.to_string());
    let drop_image = pick(local_keymap, user_keymap, |k| k.drop_image.clone())
        .unwrap_or_else(|| DEFAULT_DROP_IMAGE.to_string());
    let quit = pick(local_keymap, user_keymap, |k| k.quit.clone())
        .unwrap_or_else(|| DEFAULT_QUIT.to_string());

    Config {
        memo: MemoConfig {
            variant,
            idle_timeout,
        },
        sound: SoundConfig {
            enabled,
            path: PathBuf::from(path),
        },
        keymap: KeymapConfig {
            burn,
            paste_image,
            drop_image,
            quit,
        },
    }
}

fn parse_variant(name: Option<&str>, char_limit: usize) -> Variant {
    match name.map(|n| n.trim().to_lowercase()).as_deref() {
        None | Some("unbounded") => Variant::Unbounded,
        Some("capped") => Variant::Capped(char_limit),
        Some(other) => {
            tracing::warn!(variant = other, "unknown memo variant, using unbounded");
            Variant::Unbounded
        }
    }
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(config_home.join("shadow-memo").join("config.toml"))
}

pub(crate) fn local_config_path(root: &Path) -> PathBuf {
    root.join(".shadow-memo").join("config.toml")
}

pub fn load_config(root: &Path) -> Config {
    let local_path = local_config_path(root);
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, local_config)
}
