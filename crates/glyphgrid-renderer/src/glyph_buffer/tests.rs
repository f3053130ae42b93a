use super::*;

fn red() -> Color {
    Color::from_u32(0xff0000ff)
}

#[test]
fn new_buffer_is_zeroed() {
    let buf = GlyphInstanceBuffer::new(8);
    assert_eq!(buf.capacity(), 8);
    assert_eq!(buf.snapshot_for_upload().len(), 8 * GLYPH_RECORD_SIZE);
    assert!(buf.snapshot_for_upload().iter().all(|&b| b == 0));
    assert_eq!(buf.dropped_writes(), 0);
}

#[test]
fn default_capacity() {
    assert_eq!(GlyphInstanceBuffer::default().capacity(), 10_000);
}

#[test]
fn zero_record_is_zero_area() {
    let buf = GlyphInstanceBuffer::new(1);
    let rec = buf.record(0).unwrap();
    assert_eq!(rec.scale, 0.0);
    assert_eq!(rec.glyph_index, 0);
}

#[test]
fn write_lands_at_slot_offset() {
    let mut buf = GlyphInstanceBuffer::new(4);
    assert!(buf.write(2, Vec2::new(12.5, -3.0), 2.0, 'A', red()));

    let snap = buf.snapshot_for_upload();
    let at = 2 * GLYPH_RECORD_SIZE;
    assert_eq!(&snap[at..at + 4], &12.5f32.to_le_bytes());
    assert_eq!(&snap[at + 4..at + 8], &(-3.0f32).to_le_bytes());
    assert_eq!(&snap[at + 8..at + 12], &2.0f32.to_le_bytes());
    assert_eq!(&snap[at + 12..at + 16], &65i32.to_le_bytes());
    assert_eq!(&snap[at + 16..at + 20], &[0xff, 0x00, 0x00, 0xff]);
}

#[test]
fn write_does_not_touch_neighbours() {
    let mut buf = GlyphInstanceBuffer::new(3);
    buf.write(1, Vec2::new(1.0, 1.0), 1.0, 'x', red());

    let snap = buf.snapshot_for_upload();
    assert!(snap[..GLYPH_RECORD_SIZE].iter().all(|&b| b == 0));
    assert!(snap[2 * GLYPH_RECORD_SIZE..].iter().all(|&b| b == 0));
}

#[test]
fn record_decodes_written_fields() {
    let mut buf = GlyphInstanceBuffer::new(4);
    let color = Color::from_rgba(1, 2, 3, 4);
    buf.write(3, Vec2::new(-7.25, 100.0), 0.5, 'q', color);

    let rec = buf.record(3).unwrap();
    assert_eq!(rec.position, Vec2::new(-7.25, 100.0));
    assert_eq!(rec.scale, 0.5);
    assert_eq!(rec.glyph_index, 'q' as i32);
    assert_eq!(rec.color, color);
}

#[test]
fn out_of_range_write_is_dropped() {
    let mut buf = GlyphInstanceBuffer::new(2);
    buf.write(0, Vec2::new(1.0, 2.0), 1.0, 'a', red());
    let before = buf.snapshot_for_upload().to_vec();

    assert!(!buf.write(2, Vec2::new(9.0, 9.0), 1.0, 'b', red()));
    assert!(!buf.write(usize::MAX, Vec2::ZERO, 1.0, 'c', red()));

    assert_eq!(buf.snapshot_for_upload(), &before[..]);
    assert_eq!(buf.dropped_writes(), 2);
    assert!(buf.record(2).is_none());
}

#[test]
fn write_string_advances_pen_by_six_times_scale() {
    let mut buf = GlyphInstanceBuffer::new(4);
    let pos = Vec2::new(10.0, 20.0);
    let stored = buf.write_string(0, pos, 1.0, "Hi", red());
    assert_eq!(stored, 2);

    let h = buf.record(0).unwrap();
    let i = buf.record(1).unwrap();
    assert_eq!(h.position, pos);
    assert_eq!(h.glyph_index, 'H' as i32);
    assert_eq!(i.position, Vec2::new(16.0, 20.0));
    assert_eq!(i.glyph_index, 'i' as i32);
    assert_eq!(h.color, red());
    assert_eq!(i.color, red());

    buf.write_string(2, Vec2::ZERO, 3.0, "ab", red());
    assert_eq!(buf.record(3).unwrap().position, Vec2::new(18.0, 0.0));
}

#[test]
fn write_string_truncates_at_capacity() {
    let mut buf = GlyphInstanceBuffer::new(3);
    let stored = buf.write_string(1, Vec2::ZERO, 1.0, "hello", red());
    assert_eq!(stored, 2);
    assert_eq!(buf.dropped_writes(), 3);
    assert_eq!(buf.record(1).unwrap().glyph_index, 'h' as i32);
    assert_eq!(buf.record(2).unwrap().glyph_index, 'e' as i32);
    assert!(buf.record(0).unwrap().scale == 0.0);
}

#[test]
fn write_string_counts_chars_not_bytes() {
    let mut buf = GlyphInstanceBuffer::new(8);
    let stored = buf.write_string(0, Vec2::ZERO, 1.0, "\u{e9}\u{2192}x", red());
    assert_eq!(stored, 3);
    assert_eq!(buf.record(0).unwrap().glyph_index, 0xe9);
    assert_eq!(buf.record(1).unwrap().glyph_index, 0x2192);
    assert_eq!(buf.record(2).unwrap().glyph_index, 'x' as i32);
    assert_eq!(buf.record(2).unwrap().position, Vec2::new(12.0, 0.0));
}

#[test]
fn clear_zeroes_everything() {
    let mut buf = GlyphInstanceBuffer::new(4);
    buf.write_string(0, Vec2::new(5.0, 5.0), 1.0, "abcd", red());
    buf.clear();
    assert!(buf.snapshot_for_upload().iter().all(|&b| b == 0));
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn record_round_trips_through_bytes() {
    let rec = GlyphRecord::new(Vec2::new(3.0, -4.0), 1.5, 'Z', Color::from_u32(0x10203040));
    let bytes = rec.to_bytes();
    assert_eq!(&bytes[16..20], &[0x10, 0x20, 0x30, 0x40]);
    assert_eq!(GlyphRecord::from_bytes(&bytes), rec);
}

#[test]
fn high_code_points_alias_into_atlas() {
    let rec = GlyphRecord::new(Vec2::ZERO, 1.0, '\u{141}', Color::WHITE);
    assert_eq!(rec.glyph_index, 0x141);
    // 0x141 & 0xff = 0x41 -> column 1, row 2
    assert_eq!(rec.atlas_cell(), (1, 2));
}
