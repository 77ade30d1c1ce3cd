//! Minimal PDF writer: one landscape page showing one JPEG image.
//!
//! The page is 960x540 points, the slide canvas at 0.75 pt per pixel.

use std::fmt::Write as _;

use thiserror::Error;

use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH};

const PAGE_WIDTH: f32 = CANVAS_WIDTH * 0.75;
const PAGE_HEIGHT: f32 = CANVAS_HEIGHT * 0.75;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Image data is empty")]
    EmptyImage,
    #[error("Image has zero size ({0}x{1})")]
    ZeroSize(u32, u32),
    #[error("Image data is not a JPEG")]
    NotJpeg,
}

/// Build a complete PDF file whose single page is filled by `jpeg`.
pub fn single_image_page(jpeg: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PdfError> {
    if jpeg.is_empty() {
        return Err(PdfError::EmptyImage);
    }
    if width == 0 || height == 0 {
        return Err(PdfError::ZeroSize(width, height));
    }
    if !jpeg.starts_with(&[0xFF, 0xD8]) {
        return Err(PdfError::NotJpeg);
    }

    let content = format!("q\n{PAGE_WIDTH} 0 0 {PAGE_HEIGHT} 0 0 cm\n/Im0 Do\nQ\n");

    let mut writer = Writer::default();
    writer.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
    writer.object(2, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    writer.object(
        3,
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>"
        )
        .as_bytes(),
    );
    writer.stream(
        4,
        &format!(
            "<< /Type /XObject /Subtype /Image /Width {width} /Height {height} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>",
            jpeg.len()
        ),
        jpeg,
    );
    writer.stream(
        5,
        &format!("<< /Length {} >>", content.len()),
        content.as_bytes(),
    );
    Ok(writer.finish(1))
}

#[derive(Default)]
struct Writer {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl Writer {
    fn header(&mut self) {
        if self.buf.is_empty() {
            self.buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.header();
        self.offsets.push(self.buf.len());
        debug_assert_eq!(self.offsets.len(), id);
        self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        let mut body = Vec::with_capacity(dict.len() + data.len() + 32);
        body.extend_from_slice(dict.as_bytes());
        body.extend_from_slice(b"\nstream\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.object(id, &body);
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        self.header();
        let xref = self.buf.len();
        let mut table = String::new();
        let _ = writeln!(table, "xref\n0 {}", self.offsets.len() + 1);
        table.push_str("0000000000 65535 f \n");
        for offset in &self.offsets {
            let _ = writeln!(table, "{offset:010} 00000 n ");
        }
        let _ = write!(
            table,
            "trailer\n<< /Size {} /Root {root} 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            self.offsets.len() + 1
        );
        self.buf.extend_from_slice(table.as_bytes());
        self.buf
    }
}
