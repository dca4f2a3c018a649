use buffer::{Buffer, IdKind, IdSizes, WireError};
use packf::{Field, Format, Tag};

const fn sizes() -> IdSizes {
    IdSizes::new(8, 8, 4, 8, 4)
}

#[test]
fn format_matches_primitive_sequence() {
    let (a, b, c) = (0xAB_u8, 0xBEEF_u16, 0x0102_0304_u32);

    let mut batch = Buffer::new();
    packf::pack(
        &mut batch,
        "124",
        &[u64::from(a), u64::from(b), u64::from(c)],
    )
    .unwrap();

    let mut direct = Buffer::new();
    direct.pack_u8(a).unwrap();
    direct.pack_u16(b).unwrap();
    direct.pack_u32(c).unwrap();

    assert_eq!(batch.as_bytes(), direct.as_bytes());
}

#[test]
fn identifier_tags_match_wrappers() {
    let mut batch = Buffer::with_id_sizes(sizes());
    packf::pack(&mut batch, "otfsm", &[1, 2, 3, 4, 5]).unwrap();

    let mut direct = Buffer::with_id_sizes(sizes());
    direct.pack_object_id(1).unwrap();
    direct.pack_type_id(2).unwrap();
    direct.pack_field_id(3).unwrap();
    direct.pack_frame_id(4).unwrap();
    direct.pack_method_id(5).unwrap();

    assert_eq!(batch.as_bytes(), direct.as_bytes());
    assert_eq!(batch.len(), 8 + 8 + 4 + 8 + 4);
}

#[test]
fn fail_fast_unpack_consumes_only_first_field() {
    let mut input = Buffer::from_bytes(&[0x11, 0x22, 0x33]).unwrap();
    let mut dest = [0u64, 0xDEAD];
    let err = packf::unpack(&mut input, "14", &mut dest).unwrap_err();

    assert!(matches!(err, WireError::NeedLength { .. }));
    assert_eq!(input.offset(), 1);
    assert_eq!(dest[0], 0x11);
    assert_eq!(dest[1], 0xDEAD);
}

#[test]
fn fail_fast_pack_does_not_consume_later_values() {
    let mut out = Buffer::with_id_sizes(IdSizes::new(8, 8, 8, 8, 0));
    let err = packf::pack(&mut out, "1m4", &[1, 2, 3]).unwrap_err();
    assert_eq!(err, WireError::SizeUnsupported { width: 0 });
    assert_eq!(out.as_bytes(), &[1]);
}

#[test]
fn command_body_roundtrip() {
    // thread id, start frame, frame count
    let mut out = Buffer::with_id_sizes(sizes());
    out.prepare_pack(16).unwrap();
    packf::pack(&mut out, "oii", &[0x77, 0, u64::from(u32::MAX)]).unwrap();
    assert_eq!(out.len(), packf::format_size(&out, "oii"));

    let mut input = Buffer::with_id_sizes(sizes());
    input.prepare_unpack(out.as_bytes()).unwrap();
    let thread = input.unpack_object_id().unwrap();
    let start = input.unpack_i32().unwrap();
    let count = input.unpack_i32().unwrap();
    assert_eq!((thread, start, count), (0x77, 0, -1));
}

#[test]
fn typed_fields_roundtrip() {
    let fields = [
        Field::U8(3),
        Field::Id(IdKind::Object, 0xFEED),
        Field::Id(IdKind::Frame, 0xF00D),
        Field::U32(12),
    ];
    let mut out = Buffer::with_id_sizes(sizes());
    packf::pack_fields(&mut out, &fields).unwrap();

    let tags: Vec<Tag> = fields.iter().map(|f| f.tag()).collect();
    let format = Format::from_tags(tags);
    assert_eq!(format.to_string(), "1os4");
    assert_eq!(format.encoded_len(sizes()), out.len());

    let mut input = Buffer::with_id_sizes(sizes());
    input.prepare_unpack(out.as_bytes()).unwrap();
    let decoded = packf::unpack_fields(&mut input, format.tags()).unwrap();
    assert_eq!(decoded, fields);
}

#[test]
fn string_payload_between_fields() {
    let mut out = Buffer::with_id_sizes(sizes());
    packf::pack(&mut out, "o", &[5]).unwrap();
    out.pack_str(b"Ljava/lang/Object;").unwrap();
    packf::pack(&mut out, "4", &[9]).unwrap();

    let mut input = Buffer::with_id_sizes(sizes());
    input.prepare_unpack(out.as_bytes()).unwrap();
    assert_eq!(packf::unpack_values(&mut input, "o").unwrap(), vec![5]);
    assert_eq!(input.unpack_str().unwrap(), b"Ljava/lang/Object;");
    assert_eq!(packf::unpack_values(&mut input, "4").unwrap(), vec![9]);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn size_lookup_per_tag() {
    let buf = Buffer::with_id_sizes(sizes());
    let widths: Vec<usize> = "124il8otfsm\0?"
        .chars()
        .map(|c| packf::size(&buf, c))
        .collect();
    assert_eq!(widths, vec![1, 2, 4, 4, 8, 8, 8, 8, 4, 8, 4, 0, 0]);
}
