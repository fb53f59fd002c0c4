use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::error::MemoError;

const RAMP: &[u8] = b" .:-=+*#%@";

/// An image taken from the clipboard, kept as decoded RGBA pixels.
#[derive(Debug, Clone)]
pub struct PastedImage {
    pixels: RgbaImage,
}

impl PastedImage {
    /// Build from raw RGBA8 bytes as handed out by the system clipboard.
    pub fn from_rgba(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, MemoError> {
        let len = bytes.len();
        let invalid = || MemoError::InvalidImage { width, height, len };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let w = u32::try_from(width).map_err(|_| invalid())?;
        let h = u32::try_from(height).map_err(|_| invalid())?;
        let pixels = RgbaImage::from_raw(w, h, bytes).ok_or_else(invalid)?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Grayscale ASCII rendition that fits in `cols` x `rows` cells.
    ///
    /// Terminal cells are about twice as tall as wide, so the source height is
    /// halved before fitting.
    pub fn preview(&self, cols: u16, rows: u16) -> Vec<String> {
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let (w, h) = scale_to_fit(
            self.width(),
            (self.height() / 2).max(1),
            u32::from(cols),
            u32::from(rows),
        );
        let resized = DynamicImage::ImageRgba8(self.pixels.clone())
            .resize_exact(w, h, FilterType::Triangle)
            .to_rgba8();

        let mut lines = Vec::with_capacity(h as usize);
        for y in 0..resized.height() {
            let mut line = String::with_capacity(w as usize);
            for x in 0..resized.width() {
                let [r, g, b, a] = resized.get_pixel(x, y).0;
                // Transparent pixels read as background.
                let luma = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
                let luma = luma * u32::from(a) / 255;
                let idx = (luma as usize * (RAMP.len() - 1)) / 255;
                line.push(RAMP[idx] as char);
            }
            lines.push(line);
        }
        lines
    }
}

fn scale_to_fit(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
    let new_w = (width as f32 * scale).round().clamp(1.0, max_width as f32) as u32;
    let new_h = (height as f32 * scale).round().clamp(1.0, max_height as f32) as u32;
    (new_w, new_h)
}

#[cfg(test)]
mod tests {
    use super::{scale_to_fit, PastedImage};
    use crate::error::MemoError;

    fn solid(width: usize, height: usize, value: u8) -> PastedImage {
        PastedImage::from_rgba(width, height, vec![value; width * height * 4]).expect("image")
    }

    #[test]
    fn from_rgba_rejects_mismatched_length() {
        let err = PastedImage::from_rgba(4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(
            err,
            MemoError::InvalidImage {
                width: 4,
                height: 4,
                len: 10
            }
        ));
    }

    #[test]
    fn from_rgba_rejects_empty_dimensions() {
        assert!(PastedImage::from_rgba(0, 3, Vec::new()).is_err());
    }

    #[test]
    fn preview_fits_requested_cells() {
        let image = solid(64, 64, 255);
        let lines = image.preview(20, 8);
        assert!(!lines.is_empty());
        assert!(lines.len() <= 8);
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn preview_maps_white_to_dense_glyph() {
        let image = solid(8, 8, 255);
        let lines = image.preview(4, 4);
        assert!(lines[0].chars().all(|ch| ch == '@'));
    }

    #[test]
    fn preview_empty_area_is_empty() {
        assert!(solid(2, 2, 0).preview(0, 5).is_empty());
    }

    #[test]
    fn scale_to_fit_keeps_aspect() {
        assert_eq!(scale_to_fit(100, 50, 10, 10), (10, 5));
        assert_eq!(scale_to_fit(10, 40, 20, 8), (2, 8));
    }
}
