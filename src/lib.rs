//! gifspan measures how long a GIF animation plays.
//!
//! Given the raw bytes of a GIF it computes the total animation duration, the
//! frame count and per-frame timing by walking the documented block grammar.
//! No image-decoding library is involved: only block boundaries are read.
//!
//! # Pipeline overview
//!
//! 1. **Fetch** (optional): [`Fetcher`] retrieves at most [`MAX_GIF_BYTES`] from an
//!    `http`/`https` URL.
//! 2. **Scan**: [`scan_frames`] walks header, color tables, extensions and image
//!    blocks, producing a [`GifTimeline`].
//! 3. **Finalize**: [`GifTimeline::duration`] collapses the timeline into a
//!    [`GifDuration`]; [`analyze_gif`] does both steps.
//! 4. **Report**: [`DurationReport`] is the serializable success/failure shape
//!    handed to whatever transport sits on top.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure parser**: scanning is synchronous, allocation-light and holds no
//!   shared state, so it can run concurrently from any number of threads.
//! - **All or nothing**: malformed input yields a [`GifError`] with a stable
//!   reason string, never a partial duration.
//!
//! Frame delays follow the common rendering convention: a frame with no
//! Graphic Control Extension, or with a declared delay below
//! [`MIN_DELAY_CS`], counts as [`DEFAULT_DELAY_CS`] hundredths of a second.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod fetch;
mod foundation;
mod gif;
mod pipeline;

pub use fetch::{FetchConfig, Fetcher, MAX_GIF_BYTES, validate_url};
pub use foundation::error::{FetchError, GifError, GifspanError, GifspanResult};
pub use gif::scan::{analyze_gif, scan_frames};
pub use gif::{
    DEFAULT_DELAY_CS, FrameTiming, GifDuration, GifTimeline, GifVersion, MIN_DELAY_CS,
};
pub use pipeline::{DurationReport, analyze_bytes, analyze_file, analyze_url, read_gif_file};
