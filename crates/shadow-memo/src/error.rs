//! Internal error type for the fallible edges of the app.
//!
//! None of these reach the user as a dialog: clipboard failures turn into a
//! footer message, audio failures are logged and dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("image is {width}x{height} but carries {len} bytes")]
    InvalidImage {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("images are not accepted by the capped memo")]
    ImagesDisabled,
    #[cfg(feature = "sound")]
    #[error("audio playback failed: {0}")]
    Audio(String),
    #[cfg(feature = "sound")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
