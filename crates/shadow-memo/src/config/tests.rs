use super::{load_config, local_config_path, user_config_path, Config};
use crate::memo::Variant;
use crate::test_utils::ScopedEnv;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let home = TempDir::new().expect("temp home");
    let config_home = TempDir::new().expect("temp config");
    let mut env = ScopedEnv::new();
    env.set("HOME", home.path())
        .set("XDG_CONFIG_HOME", config_home.path());

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());

    assert_eq!(config.memo.variant, Variant::Unbounded);
    assert_eq!(config.memo.idle_timeout, Some(Duration::from_secs(300)));
    assert!(config.sound.enabled);
    assert_eq!(config.sound.path, Path::new("sounds/burn.wav"));
    assert_eq!(config.keymap.burn, "ctrl+b");
    assert_eq!(config.keymap.paste_image, "ctrl+v");
    assert_eq!(config.keymap.drop_image, "ctrl+d");
    assert_eq!(config.keymap.quit, "ctrl+q");
}

#[test]
fn load_config_merges_user_and_local() {
    let home = TempDir::new().expect("temp home");
    let config_home = TempDir::new().expect("temp config");
    let mut env = ScopedEnv::new();
    env.set("HOME", home.path())
        .set("XDG_CONFIG_HOME", config_home.path());

    let user_path = user_config_path().expect("user config path");
    assert!(user_path.starts_with(config_home.path()));
    write_config(
        &user_path,
        r#"
[memo]
variant = "capped"
char_limit = 280
idle_timeout_secs = 60

[sound]
enabled = false
path = "/tmp/user.wav"

[keymap]
burn = "ctrl+x"
quit = "ctrl+w"
"#,
    );

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        r#"
[memo]
charLimit = 140

[sound]
path = "local.wav"

[keymap]
burn = "f2"
pasteImage = "alt+v"
"#,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.memo.variant, Variant::Capped(140));
    assert_eq!(config.memo.idle_timeout, Some(Duration::from_secs(60)));
    assert!(!config.sound.enabled);
    assert_eq!(config.sound.path, Path::new("local.wav"));
    assert_eq!(config.keymap.burn, "f2");
    assert_eq!(config.keymap.paste_image, "alt+v");
    assert_eq!(config.keymap.quit, "ctrl+w");
}

#[test]
fn zero_idle_timeout_disables_auto_burn() {
    let config_home = TempDir::new().expect("temp config");
    let mut env = ScopedEnv::new();
    env.set("XDG_CONFIG_HOME", config_home.path());

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        "[memo]\nidleTimeoutSecs = 0\n",
    );

    let config = load_config(cwd.path());
    assert_eq!(config.memo.idle_timeout, None);
}

#[test]
fn malformed_or_unknown_values_fall_back() {
    let config_home = TempDir::new().expect("temp config");
    let mut env = ScopedEnv::new();
    env.set("XDG_CONFIG_HOME", config_home.path());

    let user_path = user_config_path().expect("user config path");
    write_config(&user_path, "[memo\nvariant = ");

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        "[memo]\nvariant = \"scroll\"\nchar_limit = 0\n",
    );

    let config = load_config(cwd.path());
    assert_eq!(config.memo.variant, Variant::Unbounded);
    assert_eq!(config.keymap.burn, Config::default().keymap.burn);
}

#[test]
fn capped_limit_is_at_least_one() {
    let config_home = TempDir::new().expect("temp config");
    let mut env = ScopedEnv::new();
    env.set("XDG_CONFIG_HOME", config_home.path());

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &local_config_path(cwd.path()),
        "[memo]\nvariant = \"Capped\"\nchar_limit = 0\n",
    );

    assert_eq!(load_config(cwd.path()).memo.variant, Variant::Capped(1));
}

#[test]
fn empty_xdg_config_home_falls_back_to_home() {
    let home = TempDir::new().expect("temp home");
    let mut env = ScopedEnv::new();
    env.set("HOME", home.path()).set("XDG_CONFIG_HOME", "");

    let path = user_config_path().expect("user config path");
    assert_eq!(
        path,
        home.path()
            .join(".config")
            .join("shadow-memo")
            .join("config.toml")
    );
}
