//! Format-string driven batch pack/unpack for the jdwire codec.
//!
//! A format is a string of single-character tags, one per field (see
//! [`Tag`] for the table). This crate packs a message body from a format
//! and a value list in one call, unpacks one back into value slots, and
//! reports per-tag byte sizes for callers that pre-size messages.
//!
//! Two equivalent input shapes are supported:
//!
//! - **Dynamic** - a `&str` format plus a `&[u64]` value list, for generic
//!   tooling that only learns the layout at runtime.
//! - **Typed** - a `&[Field]` where every element carries its own tag, for
//!   callers that know the layout at compile time.
//!
//! # Example
//!
//! ```
//! use buffer::{Buffer, IdSizes};
//!
//! let mut out = Buffer::with_id_sizes(IdSizes::uniform(8));
//! packf::pack(&mut out, "oii", &[0x42, 0, u64::from(u32::MAX)]).unwrap();
//! assert_eq!(out.len(), packf::format_size(&out, "oii"));
//!
//! let mut input = Buffer::from_bytes(out.as_bytes()).unwrap();
//! input.configure(IdSizes::uniform(8));
//! let mut slots = [0u64; 3];
//! packf::unpack(&mut input, "oii", &mut slots).unwrap();
//! assert_eq!(slots, [0x42, 0, 0xFFFF_FFFF]);
//! ```

mod batch;
mod field;
mod format;
mod tag;

pub use batch::{
    format_size, pack, pack_fields, pack_format, size, unpack, unpack_fields, unpack_values,
};
pub use field::{pack_field, unpack_field, Field};
pub use format::Format;
pub use tag::{Tag, TERMINATOR};
