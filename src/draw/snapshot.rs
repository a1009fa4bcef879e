//! Raster snapshots: raw pixel copies and their compressed history form.

use super::canvas::CanvasError;
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use std::io::{Read, Write};

/// Uncompressed copy of a surface's pixels (Cairo ARGB32, native endian).
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// Bytes per row, including any padding the surface adds
    pub stride: usize,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Returns the premultiplied `[r, g, b, a]` value at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        // ARGB32 stores each pixel as a native-endian u32
        let argb = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }

    /// Returns one row of pixel bytes without stride padding.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * 4]
    }
}

/// Opaque history entry: a gzip-compressed [`PixelBuffer`].
///
/// Turning it back into pixels ([`Snapshot::decode`]) is the suspending step
/// of undo/redo; see [`crate::history::RestoreSlot`].
#[derive(Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    stride: usize,
    payload: Vec<u8>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("compressed_bytes", &self.payload.len())
            .finish()
    }
}

impl Snapshot {
    /// Compresses a pixel buffer into a history entry.
    pub fn encode(pixels: &PixelBuffer) -> Result<Self, CanvasError> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(&pixels.data)?;
        let payload = encoder.finish()?;

        Ok(Self {
            width: pixels.width,
            height: pixels.height,
            stride: pixels.stride,
            payload,
        })
    }

    /// Decompresses back into pixels.
    pub fn decode(&self) -> Result<PixelBuffer, CanvasError> {
        let expected = self.stride * self.height as usize;
        let mut data = Vec::with_capacity(expected);
        GzDecoder::new(&self.payload[..]).read_to_end(&mut data)?;

        if data.len() != expected {
            return Err(CanvasError::CorruptSnapshot(format!(
                "expected {} bytes for {}x{} (stride {}), got {}",
                expected,
                self.width,
                self.height,
                self.stride,
                data.len()
            )));
        }

        Ok(PixelBuffer {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the compressed payload in bytes.
    pub fn compressed_len(&self) -> usize {
        self.payload.len()
    }
}
