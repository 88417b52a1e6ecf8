use crate::{
    foundation::error::GifError,
    gif::{
        EXTENSION_INTRODUCER, FrameTiming, GRAPHIC_CONTROL_BLOCK_SIZE, GRAPHIC_CONTROL_LABEL,
        GifDuration, GifTimeline, GifVersion, IMAGE_SEPARATOR, MIN_GIF_LEN, TRAILER,
        color_table_len, cursor::ByteCursor,
    },
};

/// Walk the block structure of `bytes` and return the timing of every frame.
///
/// Single forward pass, no backtracking. Succeeds only when the trailer is
/// reached; a file with zero image blocks still yields an empty timeline here
/// and is rejected by [`GifTimeline::duration`].
pub fn scan_frames(bytes: &[u8]) -> Result<GifTimeline, GifError> {
    if bytes.len() < MIN_GIF_LEN {
        return Err(GifError::TooSmall);
    }

    let mut cursor = ByteCursor::new(bytes);
    let version = GifVersion::from_signature(cursor.read_bytes(6)?).ok_or(GifError::NotAGif)?;

    // Logical screen descriptor: width, height, packed, background, aspect.
    cursor.skip(4)?;
    let screen_packed = cursor.read_u8()?;
    cursor.skip(2)?;
    cursor.skip(color_table_len(screen_packed))?;

    let mut acc = FrameAccumulator::default();
    loop {
        let offset = cursor.offset();
        match cursor.read_u8()? {
            TRAILER => break,
            EXTENSION_INTRODUCER => {
                let label = cursor.read_u8()?;
                if label == GRAPHIC_CONTROL_LABEL {
                    let delay = read_graphic_control(&mut cursor)?;
                    tracing::trace!(offset, delay, "graphic control extension");
                    acc.pending_delay = Some(delay);
                } else {
                    tracing::trace!(offset, label, "skipping extension");
                    cursor.skip_sub_blocks()?;
                }
            }
            IMAGE_SEPARATOR => {
                skip_image(&mut cursor)?;
                acc.push_frame(offset);
            }
            other => {
                tracing::debug!(offset, byte = other, "unexpected block introducer");
                return Err(GifError::InvalidStructure);
            }
        }
    }

    tracing::debug!(
        version = version.as_str(),
        frames = acc.frames.len(),
        "scanned gif"
    );

    Ok(GifTimeline {
        version,
        frames: acc.frames,
    })
}

/// Measure the total animation duration of a GIF buffer.
pub fn analyze_gif(bytes: &[u8]) -> Result<GifDuration, GifError> {
    scan_frames(bytes)?.duration()
}

/// Parse state threaded through the block loop.
#[derive(Default)]
struct FrameAccumulator {
    /// Delay from the most recent GCE, consumed by the next image block.
    pending_delay: Option<u16>,
    frames: Vec<FrameTiming>,
}

impl FrameAccumulator {
    fn push_frame(&mut self, offset: usize) {
        let declared = self.pending_delay.take();
        self.frames.push(FrameTiming {
            index: self.frames.len(),
            offset,
            declared_delay_cs: declared,
            delay_cs: FrameTiming::effective_delay_cs(declared),
        });
    }
}

/// Reads a GCE body after its label; returns the delay in hundredths.
fn read_graphic_control(cursor: &mut ByteCursor<'_>) -> Result<u16, GifError> {
    if cursor.read_u8()? != GRAPHIC_CONTROL_BLOCK_SIZE {
        return Err(GifError::InvalidGceBlock);
    }
    // packed, delay (u16 le), transparent index
    let data = cursor.read_bytes(usize::from(GRAPHIC_CONTROL_BLOCK_SIZE))?;
    // block terminator
    cursor.skip(1)?;
    Ok(u16::from_le_bytes([data[1], data[2]]))
}

/// Skips an image block after its separator byte.
fn skip_image(cursor: &mut ByteCursor<'_>) -> Result<(), GifError> {
    // left, top, width, height
    cursor.skip(8)?;
    let packed = cursor.read_u8()?;
    cursor.skip(color_table_len(packed))?;
    // LZW minimum code size
    cursor.skip(1)?;
    cursor.skip_sub_blocks()
}

#[cfg(test)]
#[path = "../../tests/unit/gif/scan.rs"]
mod tests;
