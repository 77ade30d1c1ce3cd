use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use crate::model::Slide;
use crate::pdf;
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const DEFAULT_JSON_NAME: &str = "presentation.json";
pub const DEFAULT_PDF_NAME: &str = "slide.pdf";

const JPEG_QUALITY: u8 = 92;

/// Write the deck as a pretty-printed JSON array of slide records.
pub fn write_json(path: &Path, slides: &[Slide]) -> Result<()> {
    let json = serde_json::to_string_pretty(slides)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {} slides to {}", slides.len(), path.display());
    Ok(())
}

/// Read a deck written by [`write_json`].
pub fn load_deck(path: &Path) -> Result<Vec<Slide>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let slides: Vec<Slide> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a slide deck", path.display()))?;
    if slides.is_empty() {
        anyhow::bail!("No slides found in {}", path.display());
    }
    Ok(slides)
}

/// Document title for a deck file: its file stem.
pub fn deck_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Drop the alpha channel of a screenshot.
pub fn to_rgb(image: &egui::ColorImage) -> image::RgbImage {
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b()])
        .collect();
    image::RgbImage::from_raw(image.width() as u32, image.height() as u32, pixels)
        .unwrap_or_default()
}

/// Crop `region` (in physical pixels) out of a screenshot and scale it to the
/// canvas size.
pub fn crop_to_canvas(screenshot: &egui::ColorImage, region: egui::Rect) -> image::RgbImage {
    let rgb = to_rgb(screenshot);
    let (w, h) = rgb.dimensions();
    let x = region.min.x.max(0.0) as u32;
    let y = region.min.y.max(0.0) as u32;
    let cw = (region.width().max(1.0) as u32).min(w.saturating_sub(x)).max(1);
    let ch = (region.height().max(1.0) as u32).min(h.saturating_sub(y)).max(1);
    let x = x.min(w.saturating_sub(1));
    let y = y.min(h.saturating_sub(1));
    let cropped = image::imageops::crop_imm(&rgb, x, y, cw, ch).to_image();
    image::imageops::resize(
        &cropped,
        CANVAS_WIDTH as u32,
        CANVAS_HEIGHT as u32,
        image::imageops::FilterType::Triangle,
    )
}

/// Save an RGB slide image as a single-page PDF.
pub fn write_pdf(path: &Path, slide: &image::RgbImage) -> Result<()> {
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(slide)
        .context("Failed to encode slide image")?;
    let bytes = pdf::single_image_page(&jpeg, slide.width(), slide.height())?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved slide PDF to {}", path.display());
    Ok(())
}

/// Save a screenshot as PNG.
pub fn write_png(path: &Path, image: &egui::ColorImage) -> Result<()> {
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();
    image::save_buffer(
        path,
        &pixels,
        image.width() as u32,
        image.height() as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to save {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("orbitslide-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_json_round_trip() {
        let path = temp_path("deck.json");
        let slides = vec![
            Slide::new("Intro", Layout::Title, &["a"]).with_image_keyword("sky"),
            Slide::new("42%", Layout::BigNumber, &[]).with_animation("animate__zoomIn"),
        ];
        write_json(&path, &slides).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"imageKeyword\": \"sky\""));
        assert!(text.contains("\"animationType\": \"animate__zoomIn\""));
        assert!(text.starts_with("[\n"));

        assert_eq!(load_deck(&path).unwrap(), slides);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_empty_and_invalid() {
        let path = temp_path("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(load_deck(&path).is_err());
        std::fs::write(&path, "{\"title\": 1}").unwrap();
        assert!(load_deck(&path).is_err());
        std::fs::remove_file(&path).ok();
        assert!(load_deck(&path).is_err());
    }

    #[test]
    fn test_deck_title() {
        assert_eq!(deck_title(Path::new("/tmp/Mars Trip.json")), "Mars Trip");
    }

    #[test]
    fn test_crop_to_canvas() {
        let mut rgba = vec![0u8; 200 * 100 * 4];
        for y in 0..100 {
            for x in 0..200 {
                let red = (10..60).contains(&y) && (20..100).contains(&x);
                let i = (y * 200 + x) * 4;
                rgba[i..i + 4].copy_from_slice(if red { &[255, 0, 0, 255] } else { &[0, 0, 0, 255] });
            }
        }
        let screenshot = egui::ColorImage::from_rgba_unmultiplied([200, 100], &rgba);
        let region = egui::Rect::from_min_max(egui::pos2(20.0, 10.0), egui::pos2(100.0, 55.0));
        let slide = crop_to_canvas(&screenshot, region);
        assert_eq!(slide.dimensions(), (1280, 720));
        assert_eq!(slide.get_pixel(640, 360).0, [255, 0, 0]);
    }

    #[test]
    fn test_write_pdf() {
        let path = temp_path("slide.pdf");
        let slide = image::RgbImage::from_pixel(1280, 720, image::Rgb([10, 20, 30]));
        write_pdf(&path, &slide).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        std::fs::remove_file(&path).ok();
    }
}
