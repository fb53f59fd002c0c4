mod app;
mod burn;
mod clipboard;
mod config;
mod error;
mod events;
mod keymap;
mod logging;
mod memo;
mod pad;
mod sound;
#[cfg(test)]
mod test_utils;

fn main() -> std::io::Result<()> {
    let _log_guard = logging::init_logging();
    app::run()
}
