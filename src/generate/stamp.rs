//! Circular stamp image.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut, text_size};
use rusttype::{Font, Scale};

use crate::error::Result;

/// A line of text drawn inside the stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct StampLabel {
    /// Text to draw
    pub text: String,
    /// Top edge of the text in pixels
    pub top: i32,
}

impl StampLabel {
    /// Create a label whose top edge sits at `top`.
    pub fn new(text: impl Into<String>, top: i32) -> Self {
        Self {
            text: text.into(),
            top,
        }
    }
}

/// Options for drawing the stamp.
#[derive(Debug, Clone)]
pub struct StampOptions {
    /// Canvas width and height in pixels
    pub size: u32,

    /// Distance from the canvas edge to the outer edge of the ring
    pub margin: u32,

    /// Ring thickness in pixels
    pub ring_width: u32,

    /// Ink color (RGBA)
    pub color: [u8; 4],

    /// Text lines, horizontally centered
    pub labels: Vec<StampLabel>,

    /// TrueType font used for the labels
    pub font_path: Option<PathBuf>,

    /// Font size in pixels
    pub font_size: f32,
}

impl StampOptions {
    /// Create stamp options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font file.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Draw the ring only.
    pub fn without_font(mut self) -> Self {
        self.font_path = None;
        self
    }

    /// Replace the label lines.
    pub fn with_labels(mut self, labels: Vec<StampLabel>) -> Self {
        self.labels = labels;
        self
    }

    /// Set the ink color.
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }
}

impl Default for StampOptions {
    fn default() -> Self {
        Self {
            size: 400,
            margin: 20,
            ring_width: 8,
            color: [255, 0, 0, 255],
            labels: vec![
                StampLabel::new("电子签章", 150),
                StampLabel::new("专用章", 250),
            ],
            font_path: Some(PathBuf::from("simhei.ttf")),
            font_size: 40.0,
        }
    }
}

/// Draw the stamp on a transparent canvas.
///
/// If the font cannot be loaded the labels are skipped and only the ring
/// is drawn.
pub fn draw_stamp(options: &StampOptions) -> RgbaImage {
    let size = options.size;
    let mut image = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));
    let ink = Rgba(options.color);

    let center = (size as i32 / 2, size as i32 / 2);
    let outer = (size / 2).saturating_sub(options.margin) as i32;
    let inner = outer - options.ring_width as i32;
    if outer > 0 {
        draw_filled_circle_mut(&mut image, center, outer, ink);
        if inner > 0 {
            draw_filled_circle_mut(&mut image, center, inner, Rgba([255, 255, 255, 0]));
        }
    }

    if options.labels.is_empty() {
        return image;
    }
    let Some(font) = load_font(options.font_path.as_deref()) else {
        return image;
    };

    let scale = Scale::uniform(options.font_size);
    for label in &options.labels {
        let (width, _) = text_size(scale, &font, &label.text);
        let left = (size as i32 - width) / 2;
        draw_text_mut(&mut image, ink, left, label.top, scale, &font, &label.text);
    }
    image
}

/// Draw the stamp and save it as PNG.
pub fn write_stamp<P: AsRef<Path>>(options: &StampOptions, path: P) -> Result<()> {
    let path = path.as_ref();
    draw_stamp(options).save(path)?;
    log::info!("Wrote stamp image to {}", path.display());
    Ok(())
}

fn load_font(path: Option<&Path>) -> Option<Font<'static>> {
    let path = path?;
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!(
                "Cannot read stamp font {}: {}; drawing ring only",
                path.display(),
                e
            );
            return None;
        }
    };
    let font = Font::try_from_vec(data);
    if font.is_none() {
        log::warn!(
            "{} is not a usable TrueType font; drawing ring only",
            path.display()
        );
    }
    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_geometry() {
        let image = draw_stamp(&StampOptions::new().without_font());
        assert_eq!(image.dimensions(), (400, 400));

        // Corners and center stay transparent.
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(200, 200)[3], 0);

        // A point in the middle of the ring band is inked.
        let on_ring = image.get_pixel(200, 200 - 176);
        assert_eq!(on_ring.0, [255, 0, 0, 255]);

        // Outside the ring is transparent.
        assert_eq!(image.get_pixel(200, 10)[3], 0);
    }

    #[test]
    fn test_missing_font_draws_ring_only() {
        let options = StampOptions::new().with_font("/nonexistent/font.ttf");
        let with_missing = draw_stamp(&options);
        let ring_only = draw_stamp(&StampOptions::new().without_font());
        assert_eq!(with_missing, ring_only);
    }

    #[test]
    fn test_custom_color() {
        let options = StampOptions::new()
            .without_font()
            .with_color([0, 0, 255, 255]);
        let image = draw_stamp(&options);
        assert_eq!(image.get_pixel(200, 24).0, [0, 0, 255, 255]);
    }
}
