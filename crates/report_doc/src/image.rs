//! Image content: byte buffers with sniffed format and pixel dimensions
//!
//! Formats are detected from magic bytes rather than trusted from file
//! extensions or content types. Display sizes are derived from pixel
//! dimensions at 72 dpi, so one pixel maps to one point before scaling.

use serde::{Deserialize, Serialize};

/// Image formats recognized by the magic-byte sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    WebP,
    Unknown,
}

impl ImageFormat {
    /// Detect the format from leading magic bytes
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            ImageFormat::Png
        } else if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
            ImageFormat::Jpeg
        } else if bytes.len() >= 6 && (&bytes[0..6] == b"GIF87a" || &bytes[0..6] == b"GIF89a") {
            ImageFormat::Gif
        } else if bytes.len() >= 2 && &bytes[0..2] == b"BM" {
            ImageFormat::Bmp
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            ImageFormat::WebP
        } else {
            ImageFormat::Unknown
        }
    }

    /// MIME type for the package content-type table
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }

    /// File extension used for media part names
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::WebP => "webp",
            ImageFormat::Unknown => "bin",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }
}

/// Read pixel dimensions from the image header, (0, 0) when unreadable
pub fn image_dimensions(bytes: &[u8], format: ImageFormat) -> (u32, u32) {
    match format {
        ImageFormat::Png => png_dimensions(bytes),
        ImageFormat::Jpeg => jpeg_dimensions(bytes),
        ImageFormat::Gif => gif_dimensions(bytes),
        ImageFormat::Bmp => bmp_dimensions(bytes),
        ImageFormat::WebP => webp_dimensions(bytes),
        ImageFormat::Unknown => (0, 0),
    }
}

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    // IHDR width/height live at fixed offsets after the signature
    if bytes.len() < 24 {
        return (0, 0);
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

fn jpeg_dimensions(bytes: &[u8]) -> (u32, u32) {
    // Walk segments until a start-of-frame marker
    let mut pos = 2;
    while pos + 9 < bytes.len() {
        if bytes[pos] != 0xFF {
            pos += 1;
            continue;
        }
        let marker = bytes[pos + 1];
        match marker {
            0xC0 | 0xC1 | 0xC2 | 0xC3 => {
                let height = u16::from_be_bytes([bytes[pos + 5], bytes[pos + 6]]) as u32;
                let width = u16::from_be_bytes([bytes[pos + 7], bytes[pos + 8]]) as u32;
                return (width, height);
            }
            0xD8 | 0x01 | 0xD0..=0xD7 => {
                pos += 2;
            }
            _ => {
                let len = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
                pos += 2 + len;
            }
        }
    }
    (0, 0)
}

fn gif_dimensions(bytes: &[u8]) -> (u32, u32) {
    if bytes.len() < 10 {
        return (0, 0);
    }
    let width = u16::from_le_bytes([bytes[6], bytes[7]]) as u32;
    let height = u16::from_le_bytes([bytes[8], bytes[9]]) as u32;
    (width, height)
}

fn bmp_dimensions(bytes: &[u8]) -> (u32, u32) {
    if bytes.len() < 26 {
        return (0, 0);
    }
    let width = i32::from_le_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
    let height = i32::from_le_bytes([bytes[22], bytes[23], bytes[24], bytes[25]]);
    (width.unsigned_abs(), height.unsigned_abs())
}

fn webp_dimensions(bytes: &[u8]) -> (u32, u32) {
    if bytes.len() < 30 {
        return (0, 0);
    }
    match &bytes[12..16] {
        b"VP8 " => {
            let width = u16::from_le_bytes([bytes[26], bytes[27]]) as u32 & 0x3FFF;
            let height = u16::from_le_bytes([bytes[28], bytes[29]]) as u32 & 0x3FFF;
            (width, height)
        }
        b"VP8L" => {
            let b = &bytes[21..25];
            let width = 1 + (((b[1] as u32 & 0x3F) << 8) | b[0] as u32);
            let height = 1 + (((b[3] as u32 & 0x0F) << 10) | ((b[2] as u32) << 2) | (b[1] as u32 >> 6));
            (width, height)
        }
        b"VP8X" => {
            let width = 1 + u32::from_le_bytes([bytes[24], bytes[25], bytes[26], 0]);
            let height = 1 + u32::from_le_bytes([bytes[27], bytes[28], bytes[29], 0]);
            (width, height)
        }
        _ => (0, 0),
    }
}

/// An image ready for placement: raw bytes plus display geometry in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub px_width: u32,
    pub px_height: u32,
    /// Display width in points
    pub width_pt: f32,
    /// Display height in points
    pub height_pt: f32,
    pub alt_text: String,
}

impl ImageContent {
    /// Build image content at its natural 72-dpi size
    pub fn new(
        bytes: Vec<u8>,
        format: ImageFormat,
        px_width: u32,
        px_height: u32,
        alt_text: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            format,
            px_width,
            px_height,
            width_pt: px_width as f32,
            height_pt: px_height as f32,
            alt_text: alt_text.into(),
        }
    }

    /// Build image content, sniffing format and dimensions from the bytes
    pub fn from_bytes(bytes: Vec<u8>, alt_text: impl Into<String>) -> Self {
        let format = ImageFormat::sniff(&bytes);
        let (px_width, px_height) = image_dimensions(&bytes, format);
        Self::new(bytes, format, px_width, px_height, alt_text)
    }

    /// Width divided by height, 1.0 when either dimension is unknown
    pub fn aspect_ratio(&self) -> f32 {
        if self.px_width == 0 || self.px_height == 0 {
            1.0
        } else {
            self.px_width as f32 / self.px_height as f32
        }
    }

    /// Scale to an exact display width, preserving aspect ratio
    pub fn scaled_to_width(mut self, width_pt: f32) -> Self {
        self.height_pt = width_pt / self.aspect_ratio();
        self.width_pt = width_pt;
        self
    }

    /// Scale down to fit inside a bounding box, preserving aspect ratio.
    /// Images already inside the box keep their natural size.
    pub fn scaled_to_fit(mut self, max_width_pt: f32, max_height_pt: f32) -> Self {
        if self.width_pt <= max_width_pt && self.height_pt <= max_height_pt {
            return self;
        }
        let scale = (max_width_pt / self.width_pt).min(max_height_pt / self.height_pt);
        self.width_pt *= scale;
        self.height_pt *= scale;
        self
    }
}
