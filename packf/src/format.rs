//! Parsed format strings.

use std::fmt;
use std::str::FromStr;

use buffer::{IdSizes, WireError, WireResult};

use crate::tag::{Tag, TERMINATOR};

/// Iterates the tag characters of `format` up to the first terminator.
pub fn tag_chars(format: &str) -> impl Iterator<Item = char> + '_ {
    format.chars().take_while(|c| *c != TERMINATOR)
}

/// A format string validated once for reuse.
///
/// The batch functions accept raw `&str` formats and fail lazily at the
/// first bad tag. A `Format` rejects bad tags up front instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Format {
    tags: Vec<Tag>,
}

impl Format {
    /// Parses `format`, stopping at a terminator if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OperationUnsupported`] for the first
    /// unrecognized tag.
    pub fn parse(format: &str) -> WireResult<Self> {
        let tags = tag_chars(format)
            .map(|c| Tag::from_char(c).ok_or(WireError::OperationUnsupported { tag: c }))
            .collect::<WireResult<Vec<_>>>()?;
        Ok(Self { tags })
    }

    /// Creates a format from tags.
    #[must_use]
    pub const fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Returns the tags in order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the format has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the total encoded size in bytes under `sizes`.
    #[must_use]
    pub fn encoded_len(&self, sizes: IdSizes) -> usize {
        self.tags.iter().map(|tag| tag.size(sizes)).sum()
    }
}

impl FromStr for Format {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag.as_char())?;
        }
        Ok(())
    }
}
