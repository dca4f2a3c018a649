//! Identifier kinds and per-session identifier widths.

use crate::error::{WireError, WireResult};

/// Returns `true` if `width` is a supported identifier width in bytes.
#[must_use]
pub const fn is_supported_width(width: u8) -> bool {
    matches!(width, 1 | 2 | 4 | 8)
}

/// The five identifier kinds whose widths are negotiated per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdKind {
    /// Object identifiers.
    Object,
    /// Thread identifiers. Reference-type identifiers share this width.
    Thread,
    /// Field identifiers.
    Field,
    /// Stack frame identifiers.
    Frame,
    /// Method identifiers.
    Method,
}

impl IdKind {
    /// All kinds, in configuration order.
    pub const ALL: [Self; 5] = [
        Self::Object,
        Self::Thread,
        Self::Field,
        Self::Frame,
        Self::Method,
    ];

    /// Returns a short lowercase name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Thread => "thread",
            Self::Field => "field",
            Self::Frame => "frame",
            Self::Method => "method",
        }
    }
}

/// Identifier widths negotiated for one debugging session.
///
/// Each width is `0` (unset) or one of {1, 2, 4, 8}. Widths are not checked
/// on construction; an unsupported width surfaces as
/// [`WireError::SizeUnsupported`] the first time an identifier of that kind
/// is packed or unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdSizes {
    pub object: u8,
    pub thread: u8,
    pub field: u8,
    pub frame: u8,
    pub method: u8,
}

impl IdSizes {
    /// Creates widths from explicit values.
    #[must_use]
    pub const fn new(object: u8, thread: u8, field: u8, frame: u8, method: u8) -> Self {
        Self {
            object,
            thread,
            field,
            frame,
            method,
        }
    }

    /// Creates widths where every kind uses `width` bytes.
    #[must_use]
    pub const fn uniform(width: u8) -> Self {
        Self::new(width, width, width, width, width)
    }

    /// Returns the configured width for `kind`.
    #[must_use]
    pub const fn get(self, kind: IdKind) -> u8 {
        match kind {
            IdKind::Object => self.object,
            IdKind::Thread => self.thread,
            IdKind::Field => self.field,
            IdKind::Frame => self.frame,
            IdKind::Method => self.method,
        }
    }

    /// Sets the width for `kind`.
    pub fn set(&mut self, kind: IdKind, width: u8) {
        match kind {
            IdKind::Object => self.object = width,
            IdKind::Thread => self.thread = width,
            IdKind::Field => self.field = width,
            IdKind::Frame => self.frame = width,
            IdKind::Method => self.method = width,
        }
    }

    /// Checks that every width is supported.
    ///
    /// Reports the first unsupported width in [`IdKind::ALL`] order.
    pub fn validate(self) -> WireResult<()> {
        for kind in IdKind::ALL {
            let width = self.get(kind);
            if !is_supported_width(width) {
                return Err(WireError::SizeUnsupported { width });
            }
        }
        Ok(())
    }
}
