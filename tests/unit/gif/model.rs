use super::*;

#[test]
fn color_table_len_follows_packed_bits() {
    assert_eq!(color_table_len(0x00), 0);
    assert_eq!(color_table_len(0x07), 0);
    assert_eq!(color_table_len(0x80), 6);
    assert_eq!(color_table_len(0x81), 12);
    assert_eq!(color_table_len(0xF7), 768);
}

#[test]
fn signature_matching() {
    assert_eq!(GifVersion::from_signature(b"GIF87a"), Some(GifVersion::Gif87a));
    assert_eq!(GifVersion::from_signature(b"GIF89a"), Some(GifVersion::Gif89a));
    assert_eq!(GifVersion::from_signature(b"gif89a"), None);
    assert_eq!(GifVersion::from_signature(b"GIF89"), None);
}

#[test]
fn effective_delay_substitution() {
    assert_eq!(FrameTiming::effective_delay_cs(None), DEFAULT_DELAY_CS);
    assert_eq!(FrameTiming::effective_delay_cs(Some(0)), 10);
    assert_eq!(FrameTiming::effective_delay_cs(Some(1)), 10);
    assert_eq!(FrameTiming::effective_delay_cs(Some(2)), 2);
    assert_eq!(FrameTiming::effective_delay_cs(Some(u16::MAX)), u16::MAX);
}

#[test]
fn duration_invariants() {
    let d = GifDuration::from_hundredths(7, 1).unwrap();
    assert_eq!(d.total_ms, 70);
    assert_eq!(d.seconds, 0.07);
    assert_eq!(d.ceil_seconds, 1);
    assert_eq!(d.as_duration(), Duration::from_millis(70));

    let d = GifDuration::from_hundredths(100, 4).unwrap();
    assert_eq!(d.seconds, 1.0);
    assert_eq!(d.ceil_seconds, 1);

    let d = GifDuration::from_hundredths(101, 4).unwrap();
    assert_eq!(d.ceil_seconds, 2);

    assert_eq!(GifDuration::from_hundredths(0, 0), Err(GifError::NoFrames));
}

#[test]
fn duration_serializes_with_camel_case_fields() {
    let d = GifDuration::from_hundredths(5, 1).unwrap();
    let v = serde_json::to_value(d).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "seconds": 0.05, "ceilSeconds": 1, "frames": 1, "totalMs": 50 })
    );
}

#[test]
fn frame_timing_duration() {
    let f = FrameTiming {
        index: 0,
        offset: 13,
        declared_delay_cs: Some(4),
        delay_cs: 4,
    };
    assert_eq!(f.duration(), Duration::from_millis(40));
}
