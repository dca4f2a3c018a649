//! Batch pack/unpack driven by a format.
//!
//! Every batch operation is fail-fast: the first field error is returned
//! immediately and no later field is packed, unpacked or consumed. Fields
//! before the failing one stay packed (or unpacked) in the buffer.

use buffer::{Buffer, WireError, WireResult};

use crate::field::{pack_field, unpack_field, Field};
use crate::format::{tag_chars, Format};
use crate::tag::{self, Tag};

fn parse_tag(c: char) -> WireResult<Tag> {
    Tag::from_char(c).ok_or(WireError::OperationUnsupported { tag: c })
}

/// Packs `values` positionally according to `format`.
///
/// Each tag consumes one value, truncated to the tag's width. Extra values
/// are ignored.
///
/// # Errors
///
/// Returns [`WireError::OperationUnsupported`] at an unrecognized tag,
/// [`WireError::MissingValue`] when the values run out, or the error of the
/// failing field.
pub fn pack(buf: &mut Buffer, format: &str, values: &[u64]) -> WireResult<()> {
    for (position, c) in tag_chars(format).enumerate() {
        let tag = parse_tag(c)?;
        let value = *values
            .get(position)
            .ok_or(WireError::MissingValue { position })?;
        pack_field(buf, Field::from_raw(tag, value))?;
    }
    Ok(())
}

/// Unpacks fields according to `format` into `dest`, one slot per tag.
///
/// Each value is zero-extended to 64 bits. A slot is only written once its
/// field has been read successfully, so on error the failing slot and all
/// later slots keep their previous contents.
///
/// # Errors
///
/// Returns [`WireError::OperationUnsupported`] at an unrecognized tag,
/// [`WireError::MissingValue`] when `dest` has too few slots, or the error
/// of the failing field.
pub fn unpack(buf: &mut Buffer, format: &str, dest: &mut [u64]) -> WireResult<()> {
    for (position, c) in tag_chars(format).enumerate() {
        let tag = parse_tag(c)?;
        let slot = dest
            .get_mut(position)
            .ok_or(WireError::MissingValue { position })?;
        *slot = unpack_field(buf, tag)?.raw();
    }
    Ok(())
}

/// Unpacks every field of `format` and returns the values in order.
pub fn unpack_values(buf: &mut Buffer, format: &str) -> WireResult<Vec<u64>> {
    tag_chars(format)
        .map(|c| -> WireResult<u64> { Ok(unpack_field(buf, parse_tag(c)?)?.raw()) })
        .collect()
}

/// Packs typed fields in order.
pub fn pack_fields(buf: &mut Buffer, fields: &[Field]) -> WireResult<()> {
    fields.iter().try_for_each(|field| pack_field(buf, *field))
}

/// Unpacks one typed field per tag in order.
pub fn unpack_fields(buf: &mut Buffer, tags: &[Tag]) -> WireResult<Vec<Field>> {
    tags.iter().map(|tag| unpack_field(buf, *tag)).collect()
}

/// Packs `values` according to a pre-parsed `format`.
pub fn pack_format(buf: &mut Buffer, format: &Format, values: &[u64]) -> WireResult<()> {
    for (position, tag) in format.tags().iter().enumerate() {
        let value = *values
            .get(position)
            .ok_or(WireError::MissingValue { position })?;
        pack_field(buf, Field::from_raw(*tag, value))?;
    }
    Ok(())
}

/// Returns the encoded width of one tag character under the buffer's
/// identifier widths. Does not touch the buffer's data.
///
/// The terminator and unrecognized tags both report `0`.
#[must_use]
pub fn size(buf: &Buffer, c: char) -> usize {
    tag::size(buf.id_sizes(), c)
}

/// Returns the summed width of every tag in `format`, skipping
/// unrecognized tags as [`size`] does.
#[must_use]
pub fn format_size(buf: &Buffer, format: &str) -> usize {
    tag_chars(format).map(|c| size(buf, c)).sum()
}
