#![no_main]

use buffer::{Buffer, IdSizes};
use libfuzzer_sys::fuzz_target;

const TAGS: &[u8] = b"124il8otfsmx";

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let format_len = usize::from(data[0] % 16);
    let (format_bytes, body) = data[1..].split_at(format_len.min(data.len() - 1));
    let format: String = format_bytes
        .iter()
        .map(|b| char::from(TAGS[usize::from(*b) % TAGS.len()]))
        .collect();

    let mut buf = Buffer::with_id_sizes(IdSizes::new(8, 8, 4, 8, 4));
    if buf.prepare_unpack(body).is_err() {
        return;
    }
    let mut dest = [0u64; 16];
    let _ = packf::unpack(&mut buf, &format, &mut dest);
    assert!(buf.offset() <= buf.len());

    // Whatever decoded must re-encode to the consumed prefix.
    let consumed = buf.offset();
    let mut reparse = Buffer::with_id_sizes(buf.id_sizes());
    if reparse.prepare_unpack(&body[..consumed]).is_ok() {
        let values = packf::unpack_values(&mut reparse, &format);
        if let Ok(values) = values {
            let mut out = Buffer::with_id_sizes(buf.id_sizes());
            packf::pack(&mut out, &format, &values).unwrap();
            assert_eq!(out.as_bytes(), &body[..consumed]);
        }
    }
});
