//! Growable byte buffer and big-endian primitives for the jdwire codec.
//!
//! This crate provides [`Buffer`], the single container every outbound
//! command body and inbound reply body passes through, together with the
//! scalar, identifier and string codecs that operate on it.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Storage is an exclusively owned `Vec<u8>`.
//! - **Bounded reads** - Every unpack checks the unread length first and
//!   leaves the read offset alone on failure.
//! - **No I/O** - The transport hands bytes in and drains [`Buffer::as_bytes`]
//!   out; this crate never touches a socket.
//! - **Explicit errors** - All failures return a [`WireError`], never panic.
//!
//! # Wire format
//!
//! - Integers are big-endian with no padding.
//! - Identifiers are truncated or zero-extended to the width configured for
//!   their [`IdKind`] on the buffer.
//! - Strings are a 4-byte big-endian length followed by raw bytes, with no
//!   terminator.
//!
//! # Example
//!
//! ```
//! use buffer::{Buffer, IdSizes};
//!
//! let mut out = Buffer::with_id_sizes(IdSizes::uniform(8));
//! out.pack_u8(1).unwrap();
//! out.pack_object_id(0xCAFE).unwrap();
//! out.pack_string("main").unwrap();
//!
//! let mut input = Buffer::from_bytes(out.as_bytes()).unwrap();
//! input.configure(IdSizes::uniform(8));
//! assert_eq!(input.unpack_u8().unwrap(), 1);
//! assert_eq!(input.unpack_object_id().unwrap(), 0xCAFE);
//! assert_eq!(input.unpack_str().unwrap(), b"main");
//! ```

mod buffer;
mod error;
mod ids;
mod reader;
mod writer;

pub use buffer::{grown_capacity, Buffer, GROWTH_FACTOR, MIN_CAPACITY};
pub use error::{WireError, WireResult};
pub use ids::{is_supported_width, IdKind, IdSizes};
