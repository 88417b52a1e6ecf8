/// Convenience result type used across gifspan.
pub type GifspanResult<T> = Result<T, GifspanError>;

/// Reasons a byte buffer could not be measured as a GIF animation.
///
/// The `Display` text of each variant is the stable reason string reported to
/// callers; it must not change.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GifError {
    /// Buffer is shorter than header plus logical screen descriptor.
    #[error("File too small")]
    TooSmall,

    /// First six bytes are neither `GIF87a` nor `GIF89a`.
    #[error("Not a GIF")]
    NotAGif,

    /// Graphic Control Extension declared a block size other than 4.
    #[error("Invalid GCE block")]
    InvalidGceBlock,

    /// Unknown block introducer, or a read past the end of the buffer.
    #[error("Invalid GIF structure")]
    InvalidStructure,

    /// Stream reached its trailer without a single image block.
    #[error("No frames found")]
    NoFrames,
}

/// Reasons the fetcher refused or failed to produce a byte buffer.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// No URL was supplied, or it was blank.
    #[error("Missing url")]
    MissingInput,

    /// URL did not parse as an absolute URL.
    #[error("Invalid URL")]
    InvalidUrl,

    /// URL scheme is not `http` or `https`.
    #[error("Only http and https URLs are allowed (got '{0}')")]
    DisallowedScheme(String),

    /// Remote answered with a non-2xx status.
    #[error("Failed to fetch GIF: HTTP {status}")]
    FetchFailed {
        /// HTTP status code of the response.
        status: u16,
    },

    /// Declared or actual body size exceeds [`crate::MAX_GIF_BYTES`].
    #[error("GIF too large (max 10 MiB)")]
    TooLarge,

    /// Connection, TLS or body read failure.
    #[error("Failed to fetch GIF: {0}")]
    Transport(String),
}

/// Top-level error taxonomy used by the pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum GifspanError {
    /// The resource could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The bytes were fetched but are not a measurable GIF.
    #[error(transparent)]
    Gif(#[from] GifError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifspanError {
    /// Build a [`GifspanError::Fetch`] value.
    pub fn fetch(err: FetchError) -> Self {
        Self::Fetch(err)
    }

    /// Build a [`GifspanError::Gif`] value.
    pub fn gif(err: GifError) -> Self {
        Self::Gif(err)
    }

    /// Stable reason string surfaced to callers unmodified.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
