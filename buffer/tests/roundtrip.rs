use buffer::{Buffer, IdKind, IdSizes, WireError};

#[test]
fn endianness_of_u32() {
    let mut buf = Buffer::new();
    buf.pack_u32(0x0102_0304).unwrap();
    assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn growth_to_300_bytes() {
    let mut buf = Buffer::new();
    buf.prepare_pack(0).unwrap();
    for i in 0..300u32 {
        buf.pack_u8((i % 251) as u8).unwrap();
    }
    assert_eq!(buf.len(), 300);
    assert_eq!(buf.capacity(), 1024);
    for (i, byte) in buf.as_bytes().iter().enumerate() {
        assert_eq!(*byte, (i % 251) as u8, "byte {i} changed after growth");
    }
}

#[test]
fn capacity_never_shrinks_while_packing() {
    let mut buf = Buffer::new();
    let mut last = 0;
    for i in 0..5000u64 {
        buf.pack_u64(i).unwrap();
        assert!(buf.capacity() >= last);
        assert!(buf.capacity() >= buf.len());
        last = buf.capacity();
    }
    assert_eq!(buf.capacity(), 65_536);
}

#[test]
fn identifier_width_truncation() {
    let value = 0x12_3456_789A_u64;
    let mut buf = Buffer::new();
    buf.pack_id(value, 2).unwrap();
    let mut input = Buffer::from_bytes(buf.as_bytes()).unwrap();
    assert_eq!(input.unpack_id(2).unwrap(), value & 0xFFFF);
    assert_eq!(value & 0xFFFF, 0x789A);
}

#[test]
fn identifier_widths_zero_extend() {
    let mut buf = Buffer::new();
    for width in [1, 2, 4, 8] {
        buf.pack_id(u64::MAX, width).unwrap();
    }
    let mut input = Buffer::from_bytes(buf.as_bytes()).unwrap();
    assert_eq!(input.unpack_id(1).unwrap(), 0xFF);
    assert_eq!(input.unpack_id(2).unwrap(), 0xFFFF);
    assert_eq!(input.unpack_id(4).unwrap(), 0xFFFF_FFFF);
    assert_eq!(input.unpack_id(8).unwrap(), u64::MAX);
}

#[test]
fn unsupported_width_does_not_mutate() {
    let mut buf = Buffer::new();
    buf.pack_u32(7).unwrap();
    assert_eq!(
        buf.pack_id(1, 3).unwrap_err(),
        WireError::SizeUnsupported { width: 3 }
    );
    assert_eq!(buf.len(), 4);

    let mut input = Buffer::from_bytes(buf.as_bytes()).unwrap();
    assert_eq!(
        input.unpack_id(3).unwrap_err(),
        WireError::SizeUnsupported { width: 3 }
    );
    assert_eq!(input.offset(), 0);
    assert_eq!(input.len(), 4);
}

#[test]
fn insufficient_length_keeps_offset() {
    let mut input = Buffer::from_bytes(&[0xAA, 0xBB]).unwrap();
    let err = input.unpack_u32().unwrap_err();
    assert_eq!(
        err,
        WireError::NeedLength {
            requested: 4,
            available: 2
        }
    );
    assert_eq!(input.offset(), 0);
}

#[test]
fn string_with_every_byte_value() {
    let payload: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
    let mut buf = Buffer::new();
    buf.pack_str(&payload).unwrap();

    let mut input = Buffer::from_bytes(buf.as_bytes()).unwrap();
    let view = input.unpack_str().unwrap();
    assert_eq!(view.len(), payload.len());
    assert_eq!(view, payload.as_slice());
}

#[test]
fn string_owned_copy_round_trip() {
    let payload = b"\0jdwp\0\xFF";
    let mut buf = Buffer::new();
    buf.pack_str(payload).unwrap();
    let copy = buf.unpack_str_owned().unwrap();
    assert_eq!(copy, payload);
}

#[test]
fn reuse_between_messages() {
    let sizes = IdSizes::new(8, 8, 8, 8, 8);
    let mut buf = Buffer::with_id_sizes(sizes);

    buf.prepare_pack(11).unwrap();
    buf.pack_object_id(1).unwrap();
    assert_eq!(buf.len(), 8);

    buf.prepare_unpack(&[0, 0, 0, 0, 0, 0, 0, 2]).unwrap();
    assert_eq!(buf.unpack_id_of(IdKind::Thread).unwrap(), 2);
    assert_eq!(buf.id_sizes(), sizes);

    buf.release();
    buf.release();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn released_buffer_can_be_prepared_again() {
    let mut buf = Buffer::from_bytes(&[1, 2, 3]).unwrap();
    buf.release();
    assert!(matches!(buf.unpack_u8(), Err(WireError::NeedLength { .. })));
    buf.prepare_unpack(&[9]).unwrap();
    assert_eq!(buf.unpack_u8().unwrap(), 9);
}
