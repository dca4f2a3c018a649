//! Introspection and debugging tools for the jdwire codec.
//!
//! This crate provides helpers behind the `jdwire-tools` binary:
//!
//! - Pack a format and a value list into hex, for hand-crafting command bodies
//! - Decode captured reply bytes through a format into structured output
//! - Report per-tag and total sizes of a format under a set of identifier widths
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use buffer::{Buffer, IdKind, IdSizes};
use packf::{Field, Format, Tag};
use serde::Serialize;

/// Parses identifier widths.
///
/// Accepts either a single width applied to every kind (`"8"`) or five
/// comma-separated widths in `object,thread,field,frame,method` order.
pub fn parse_id_sizes(text: &str) -> Result<IdSizes> {
    let widths = text
        .split(',')
        .map(|part| {
            let part = part.trim();
            let invalid = || format!("invalid identifier width {part:?}");
            part.parse::<u8>().with_context(invalid)
        })
        .collect::<Result<Vec<_>>>()?;
    let sizes = match widths.as_slice() {
        &[width] => IdSizes::uniform(width),
        per_kind if per_kind.len() == IdKind::ALL.len() => {
            let mut sizes = IdSizes::default();
            for (kind, width) in IdKind::ALL.into_iter().zip(per_kind) {
                sizes.set(kind, *width);
            }
            sizes
        }
        _ => bail!("expected 1 or 5 identifier widths, got {}", widths.len()),
    };
    sizes.validate().context("identifier widths")?;
    Ok(sizes)
}

/// Parses a hex string, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).context("invalid hex input")
}

/// Parses a field value.
///
/// Accepts decimal, `0x` hex, and negative decimal (stored two's complement,
/// so `-1` packs as all ones at any width).
pub fn parse_value(text: &str) -> Result<u64> {
    let text = text.trim();
    let invalid = || format!("invalid value {text:?}");
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u64::from_str_radix(digits, 16).with_context(invalid);
    }
    if text.starts_with('-') {
        let signed: i64 = text.parse().with_context(invalid)?;
        return Ok(u64::from_ne_bytes(signed.to_ne_bytes()));
    }
    text.parse().with_context(invalid)
}

/// Packs `values` through `format` and returns the bytes as lowercase hex.
pub fn pack_hex(sizes: IdSizes, format: &str, values: &[u64]) -> Result<String> {
    let mut buf = Buffer::with_id_sizes(sizes);
    let packed = packf::pack(&mut buf, format, values);
    packed.with_context(|| format!("pack format {format:?}"))?;
    Ok(hex::encode(buf.as_bytes()))
}

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    pub position: usize,
    pub offset: usize,
    pub tag: char,
    pub width: usize,
    pub value: u64,
    pub field: Field,
}

/// Result of decoding bytes through a format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub format: String,
    pub id_sizes: IdSizes,
    pub fields: Vec<DecodedField>,
    /// Bytes consumed by the format.
    pub consumed: usize,
    /// Bytes left unread after the last field.
    pub trailing: usize,
}

/// Decodes `bytes` through `format`.
pub fn decode(sizes: IdSizes, format: &str, bytes: &[u8]) -> Result<DecodeReport> {
    let parsed = Format::parse(format).context("parse format")?;
    let mut buf = Buffer::with_id_sizes(sizes);
    buf.prepare_unpack(bytes).context("load input bytes")?;

    let mut fields = Vec::with_capacity(parsed.len());
    for (position, tag) in parsed.tags().iter().enumerate() {
        let offset = buf.offset();
        let tag_char = tag.as_char();
        let context = || format!("field {position} ({tag_char:?}) at byte {offset}");
        let field = packf::unpack_field(&mut buf, *tag).with_context(context)?;
        fields.push(DecodedField {
            position,
            offset,
            tag: tag_char,
            width: buf.offset() - offset,
            value: field.raw(),
            field,
        });
    }

    Ok(DecodeReport {
        format: parsed.to_string(),
        id_sizes: sizes,
        fields,
        consumed: buf.offset(),
        trailing: buf.remaining(),
    })
}

/// Renders a decode report as aligned text.
#[must_use]
pub fn format_decode_pretty(report: &DecodeReport) -> String {
    let mut out = String::new();
    let DecodeReport {
        format,
        consumed,
        trailing,
        ..
    } = report;
    let _ = writeln!(
        out,
        "format: {format} consumed: {consumed} trailing: {trailing}"
    );
    for field in &report.fields {
        let DecodedField {
            position,
            offset,
            tag,
            width,
            value,
            field,
        } = field;
        let kind = match field {
            Field::Id(kind, _) => kind.name(),
            _ => "",
        };
        let _ = writeln!(
            out,
            "  [{position:>3}] @{offset:<5} {tag} {kind:<6} ({width} bytes) = {value:#x} ({value})"
        );
    }
    out
}

/// Size of one tag in a size report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSize {
    pub tag: char,
    pub known: bool,
    pub width: usize,
}

/// Per-tag and total sizes of a format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub format: String,
    pub tags: Vec<TagSize>,
    pub total: usize,
}

/// Reports the encoded size of every tag in `format`.
///
/// Unrecognized tags are listed with width 0 rather than rejected.
#[must_use]
pub fn size_report(sizes: IdSizes, format: &str) -> SizeReport {
    let buf = Buffer::with_id_sizes(sizes);
    let tags: Vec<TagSize> = format
        .chars()
        .take_while(|c| *c != packf::TERMINATOR)
        .map(|c| TagSize {
            tag: c,
            known: Tag::from_char(c).is_some(),
            width: packf::size(&buf, c),
        })
        .collect();
    SizeReport {
        format: format.to_string(),
        total: packf::format_size(&buf, format),
        tags,
    }
}
