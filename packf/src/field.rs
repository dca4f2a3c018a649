//! Typed field values.

use buffer::{Buffer, IdKind, WireResult};

use crate::tag::Tag;

/// One field value, tagged with its wire type.
///
/// A slice of `Field`s is the statically typed form of a format plus its
/// values: each element carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Id(IdKind, u64),
}

impl Field {
    /// Builds a field of type `tag` from a raw value, truncating it to the
    /// tag's fixed width. Identifier values are kept whole; their width is
    /// applied when packed.
    #[must_use]
    pub const fn from_raw(tag: Tag, value: u64) -> Self {
        match tag {
            Tag::U8 => Self::U8(value as u8),
            Tag::U16 => Self::U16(value as u16),
            Tag::U32 => Self::U32(value as u32),
            Tag::U64 => Self::U64(value),
            Tag::Id(kind) => Self::Id(kind, value),
        }
    }

    /// Returns the field's tag.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Self::U8(_) => Tag::U8,
            Self::U16(_) => Tag::U16,
            Self::U32(_) => Tag::U32,
            Self::U64(_) => Tag::U64,
            Self::Id(kind, _) => Tag::Id(kind),
        }
    }

    /// Returns the value zero-extended to 64 bits.
    #[must_use]
    pub const fn raw(self) -> u64 {
        match self {
            Self::U8(v) => v as u64,
            Self::U16(v) => v as u64,
            Self::U32(v) => v as u64,
            Self::U64(v) | Self::Id(_, v) => v,
        }
    }
}

/// Packs one field.
pub fn pack_field(buf: &mut Buffer, field: Field) -> WireResult<()> {
    match field {
        Field::U8(v) => buf.pack_u8(v),
        Field::U16(v) => buf.pack_u16(v),
        Field::U32(v) => buf.pack_u32(v),
        Field::U64(v) => buf.pack_u64(v),
        Field::Id(kind, v) => buf.pack_id_of(kind, v),
    }
}

/// Unpacks one field of type `tag`.
pub fn unpack_field(buf: &mut Buffer, tag: Tag) -> WireResult<Field> {
    let field = match tag {
        Tag::U8 => Field::U8(buf.unpack_u8()?),
        Tag::U16 => Field::U16(buf.unpack_u16()?),
        Tag::U32 => Field::U32(buf.unpack_u32()?),
        Tag::U64 => Field::U64(buf.unpack_u64()?),
        Tag::Id(kind) => Field::Id(kind, buf.unpack_id_of(kind)?),
    };
    Ok(field)
}

#[cfg(test)]
mod tests {
    use buffer::{IdSizes, WireError};

    use super::*;

    #[test]
    fn from_raw_truncates_fixed_widths() {
        assert_eq!(Field::from_raw(Tag::U8, 0x1FF), Field::U8(0xFF));
        assert_eq!(Field::from_raw(Tag::U16, 0x1_0002), Field::U16(2));
        assert_eq!(
            Field::from_raw(Tag::U32, 0xAAAA_BBBB_CCCC_DDDD),
            Field::U32(0xCCCC_DDDD)
        );
        assert_eq!(
            Field::from_raw(Tag::Id(IdKind::Object), u64::MAX),
            Field::Id(IdKind::Object, u64::MAX)
        );
    }

    #[test]
    fn tag_and_raw() {
        let field = Field::Id(IdKind::Method, 77);
        assert_eq!(field.tag(), Tag::Id(IdKind::Method));
        assert_eq!(field.raw(), 77);
        assert_eq!(Field::U16(9).raw(), 9);
    }

    #[test]
    fn field_roundtrip() {
        let mut buf = Buffer::with_id_sizes(IdSizes::new(8, 8, 4, 8, 2));
        let fields = [
            Field::U8(1),
            Field::U16(0x0203),
            Field::Id(IdKind::Field, 0x0405_0607),
            Field::Id(IdKind::Method, 0x0809),
        ];
        for field in fields {
            pack_field(&mut buf, field).unwrap();
        }
        assert_eq!(buf.len(), 1 + 2 + 4 + 2);
        for field in fields {
            assert_eq!(unpack_field(&mut buf, field.tag()).unwrap(), field);
        }
    }

    #[test]
    fn pack_identifier_with_unset_width() {
        let mut buf = Buffer::new();
        let err = pack_field(&mut buf, Field::Id(IdKind::Frame, 1)).unwrap_err();
        assert_eq!(err, WireError::SizeUnsupported { width: 0 });
    }
}
