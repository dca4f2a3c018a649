//! Single-character field tags.

use buffer::{IdKind, IdSizes};

/// Character that ends a format early, as in a C string.
pub const TERMINATOR: char = '\0';

/// The wire type of one field in a format.
///
/// | tag       | meaning          | width      |
/// |-----------|------------------|------------|
/// | `1`       | fixed 8-bit      | 1          |
/// | `2`       | fixed 16-bit     | 2          |
/// | `4`, `i`  | fixed 32-bit     | 4          |
/// | `8`, `l`  | fixed 64-bit     | 8          |
/// | `o`       | object id        | configured |
/// | `t`       | thread id        | configured |
/// | `f`       | field id         | configured |
/// | `s`       | frame id         | configured |
/// | `m`       | method id        | configured |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    U8,
    U16,
    U32,
    U64,
    Id(IdKind),
}

impl Tag {
    /// Parses a tag character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let tag = match c {
            '1' => Self::U8,
            '2' => Self::U16,
            '4' | 'i' => Self::U32,
            '8' | 'l' => Self::U64,
            'o' => Self::Id(IdKind::Object),
            't' => Self::Id(IdKind::Thread),
            'f' => Self::Id(IdKind::Field),
            's' => Self::Id(IdKind::Frame),
            'm' => Self::Id(IdKind::Method),
            _ => return None,
        };
        Some(tag)
    }

    /// Returns the canonical character for this tag.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::U8 => '1',
            Self::U16 => '2',
            Self::U32 => '4',
            Self::U64 => '8',
            Self::Id(IdKind::Object) => 'o',
            Self::Id(IdKind::Thread) => 't',
            Self::Id(IdKind::Field) => 'f',
            Self::Id(IdKind::Frame) => 's',
            Self::Id(IdKind::Method) => 'm',
        }
    }

    /// Returns the encoded width in bytes.
    ///
    /// Identifier tags report the configured width as-is, so an unset width
    /// reports `0`.
    #[must_use]
    pub const fn size(self, sizes: IdSizes) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
            Self::Id(kind) => sizes.get(kind) as usize,
        }
    }
}

/// Returns the encoded width of a single tag character.
///
/// The terminator and unrecognized characters both report `0`.
#[must_use]
pub fn size(sizes: IdSizes, c: char) -> usize {
    Tag::from_char(c).map_or(0, |tag| tag.size(sizes))
}
