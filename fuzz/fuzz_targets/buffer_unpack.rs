#![no_main]

use buffer::{Buffer, IdSizes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&widths, body)) = data.split_first() else {
        return;
    };
    // Low bits pick a width per kind; unsupported widths exercise the error path.
    let pick = |shift: u8| [1u8, 2, 4, 8, 3, 0, 8, 4][usize::from((widths >> shift) & 0x7)];
    let sizes = IdSizes::new(pick(0), pick(1), pick(2), pick(3), pick(4));

    let Ok(mut buf) = Buffer::from_bytes(body) else {
        return;
    };
    buf.configure(sizes);

    let mut idx = 0usize;
    while idx < body.len() && idx < 1024 {
        let op = body[idx] % 8;
        idx += 1;
        let before = buf.offset();
        let ok = match op {
            0 => buf.unpack_u8().is_ok(),
            1 => buf.unpack_u16().is_ok(),
            2 => buf.unpack_u32().is_ok(),
            3 => buf.unpack_u64().is_ok(),
            4 => buf.unpack_object_id().is_ok(),
            5 => buf.unpack_frame_id().is_ok(),
            6 => buf.unpack_str().is_ok(),
            _ => buf.unpack_id(body[idx - 1] >> 4).is_ok(),
        };
        assert!(buf.offset() <= buf.len());
        if !ok {
            assert_eq!(buf.offset(), before);
        }
    }
});
