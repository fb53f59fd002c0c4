//! System clipboard access for the paste-image action.
//!
//! The clipboard is asked for an image first; text is only read when no
//! image is present. Callers decide what to do with each payload.

use arboard::Clipboard;

use crate::error::MemoError;
use crate::memo::PastedImage;

#[derive(Debug)]
pub enum ClipboardPayload {
    Image(PastedImage),
    Text(String),
    Empty,
}

pub trait ClipboardSource {
    fn read(&mut self) -> Result<ClipboardPayload, MemoError>;
}

/// Reads the OS clipboard through `arboard`, opening it per request.
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read(&mut self) -> Result<ClipboardPayload, MemoError> {
        let mut clipboard = Clipboard::new()?;
        match clipboard.get_image() {
            Ok(image) => {
                let pasted =
                    PastedImage::from_rgba(image.width, image.height, image.bytes.into_owned())?;
                return Ok(ClipboardPayload::Image(pasted));
            }
            Err(arboard::Error::ContentNotAvailable) => {}
            Err(err) => return Err(err.into()),
        }
        match clipboard.get_text() {
            Ok(text) if text.is_empty() => Ok(ClipboardPayload::Empty),
            Ok(text) => Ok(ClipboardPayload::Text(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardPayload::Empty),
            Err(err) => Err(err.into()),
        }
    }
}
