//! Composition of fetch or file read, scan and report.
//!
//! Every entry point converts failures into [`GifspanError`] so the reason
//! string reaches callers unmodified through [`DurationReport`].

use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

use crate::{
    fetch::{Fetcher, MAX_GIF_BYTES, check_body_len},
    foundation::error::{GifspanError, GifspanResult},
    gif::{GifDuration, scan::analyze_gif},
};

/// Measure a GIF already held in memory.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn analyze_bytes(bytes: &[u8]) -> GifspanResult<GifDuration> {
    analyze_gif(bytes).map_err(|err| {
        tracing::debug!(%err, "gif rejected");
        GifspanError::from(err)
    })
}

/// Fetch `url` with `fetcher` and measure the returned GIF.
#[tracing::instrument(skip(fetcher))]
pub fn analyze_url(fetcher: &Fetcher, url: &str) -> GifspanResult<GifDuration> {
    let bytes = fetcher.fetch(url)?;
    analyze_bytes(&bytes)
}

/// Read a local file, never holding more than one byte past [`MAX_GIF_BYTES`].
///
/// Works the same for regular files, FIFOs and devices.
pub fn read_gif_file(path: &Path) -> GifspanResult<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    let mut bytes = Vec::new();
    file.take(MAX_GIF_BYTES as u64 + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("read gif '{}'", path.display()))?;
    check_body_len(bytes.len())?;
    Ok(bytes)
}

/// Read a local GIF (same size cap as remote fetches) and measure it.
#[tracing::instrument]
pub fn analyze_file(path: &Path) -> GifspanResult<GifDuration> {
    let bytes = read_gif_file(path)?;
    analyze_bytes(&bytes)
}

/// Transport-agnostic outcome of one analysis, as returned to callers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DurationReport {
    /// Measured duration.
    Success(GifDuration),
    /// Stable, human-readable failure reason.
    Failure {
        /// Error `Display` text, unmodified.
        reason: String,
    },
}

impl DurationReport {
    /// `true` for [`DurationReport::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<GifspanResult<GifDuration>> for DurationReport {
    fn from(result: GifspanResult<GifDuration>) -> Self {
        match result {
            Ok(duration) => Self::Success(duration),
            Err(err) => Self::Failure {
                reason: err.reason(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
