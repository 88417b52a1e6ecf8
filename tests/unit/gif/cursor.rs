use super::*;

#[test]
fn reads_advance_and_stop_at_end() {
    let bytes = [1u8, 2, 3, 4];
    let mut c = ByteCursor::new(&bytes);
    assert_eq!(c.read_u8().unwrap(), 1);
    assert_eq!(c.read_bytes(2).unwrap(), &[2, 3]);
    assert_eq!(c.offset(), 3);
    assert_eq!(c.read_bytes(2), Err(GifError::InvalidStructure));
    assert_eq!(c.offset(), 3);
    c.skip(1).unwrap();
    assert_eq!(c.read_u8(), Err(GifError::InvalidStructure));
}

#[test]
fn huge_skip_does_not_overflow() {
    let bytes = [0u8; 2];
    let mut c = ByteCursor::new(&bytes);
    c.skip(1).unwrap();
    assert_eq!(c.skip(usize::MAX), Err(GifError::InvalidStructure));
}

#[test]
fn sub_block_chain_is_skipped_through_terminator() {
    let bytes = [2u8, 0xAA, 0xBB, 1, 0xCC, 0, 0x3B];
    let mut c = ByteCursor::new(&bytes);
    c.skip_sub_blocks().unwrap();
    assert_eq!(c.offset(), 6);
    assert_eq!(c.read_u8().unwrap(), 0x3B);
}

#[test]
fn unterminated_sub_block_chain_fails() {
    let bytes = [2u8, 0xAA, 0xBB, 5, 0xCC];
    let mut c = ByteCursor::new(&bytes);
    assert_eq!(c.skip_sub_blocks(), Err(GifError::InvalidStructure));
}
