//! Timing model for GIF animations.
//!
//! A GIF is a sequence of blocks. Only block boundaries matter here: the
//! scanner in [`scan`] walks header, logical screen descriptor, optional color
//! tables, extensions and image descriptors, and records one [`FrameTiming`]
//! per image block. Pixel data is never decoded.

use std::time::Duration;

use crate::foundation::error::GifError;

pub(crate) mod cursor;
pub(crate) mod scan;

/// Header (6) plus logical screen descriptor (7) plus at least one block byte.
pub(crate) const MIN_GIF_LEN: usize = 14;

/// Delay applied when an image block has no Graphic Control Extension.
pub const DEFAULT_DELAY_CS: u16 = 10;

/// Declared delays below this are replaced with [`DEFAULT_DELAY_CS`].
pub const MIN_DELAY_CS: u16 = 2;

pub(crate) const TRAILER: u8 = 0x3B;
pub(crate) const EXTENSION_INTRODUCER: u8 = 0x21;
pub(crate) const IMAGE_SEPARATOR: u8 = 0x2C;
pub(crate) const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;
pub(crate) const GRAPHIC_CONTROL_BLOCK_SIZE: u8 = 4;

const COLOR_TABLE_FLAG: u8 = 0x80;
const COLOR_TABLE_SIZE_MASK: u8 = 0x07;

/// Byte length of the global or local color table announced by a packed
/// fields byte, or 0 when the table flag is clear.
pub(crate) fn color_table_len(packed: u8) -> usize {
    if packed & COLOR_TABLE_FLAG == 0 {
        return 0;
    }
    3 * (1usize << ((packed & COLOR_TABLE_SIZE_MASK) + 1))
}

/// GIF signature version found in the first six bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GifVersion {
    /// `GIF87a`
    #[serde(rename = "87a")]
    Gif87a,
    /// `GIF89a`
    #[serde(rename = "89a")]
    Gif89a,
}

impl GifVersion {
    /// Match a six-byte signature.
    pub fn from_signature(sig: &[u8]) -> Option<Self> {
        match sig {
            b"GIF87a" => Some(Self::Gif87a),
            b"GIF89a" => Some(Self::Gif89a),
            _ => None,
        }
    }

    /// Signature text, e.g. `"GIF89a"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gif87a => "GIF87a",
            Self::Gif89a => "GIF89a",
        }
    }
}

/// Timing of one image block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTiming {
    /// 0-based position among image blocks.
    pub index: usize,
    /// Byte offset of the image separator in the buffer.
    pub offset: usize,
    /// Delay from an immediately preceding GCE, in hundredths of a second.
    pub declared_delay_cs: Option<u16>,
    /// Delay actually counted after default/minimum substitution.
    pub delay_cs: u16,
}

impl FrameTiming {
    /// Effective delay resolved from an optional declared delay.
    pub fn effective_delay_cs(declared: Option<u16>) -> u16 {
        match declared {
            Some(d) if d >= MIN_DELAY_CS => d,
            _ => DEFAULT_DELAY_CS,
        }
    }

    /// Effective delay as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_cs) * 10)
    }
}

/// Every frame found by a successful scan, in stream order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GifTimeline {
    /// Signature version.
    pub version: GifVersion,
    /// Per-frame timing.
    pub frames: Vec<FrameTiming>,
}

impl GifTimeline {
    /// Sum of effective delays in hundredths of a second.
    pub fn total_hundredths(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.delay_cs)).sum()
    }

    /// Collapse the timeline into its total duration.
    ///
    /// Fails with [`GifError::NoFrames`] when no image block was seen.
    pub fn duration(&self) -> Result<GifDuration, GifError> {
        GifDuration::from_hundredths(self.total_hundredths(), self.frames.len() as u64)
    }
}

/// Total animation duration of a GIF.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifDuration {
    /// Total duration in seconds (`total_ms / 1000`).
    pub seconds: f64,
    /// Whole-second ceiling of `seconds`, never below 1.
    pub ceil_seconds: u64,
    /// Number of image blocks, at least 1.
    pub frames: u64,
    /// Total duration in milliseconds, always a multiple of 10.
    pub total_ms: u64,
}

impl GifDuration {
    /// Build from accumulated hundredths of a second and a frame count.
    pub fn from_hundredths(total_cs: u64, frames: u64) -> Result<Self, GifError> {
        if frames == 0 {
            return Err(GifError::NoFrames);
        }
        let total_ms = total_cs.saturating_mul(10);
        Ok(Self {
            seconds: total_ms as f64 / 1000.0,
            ceil_seconds: total_ms.div_ceil(1000).max(1),
            frames,
            total_ms,
        })
    }

    /// Total duration as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/gif/model.rs"]
mod tests;
