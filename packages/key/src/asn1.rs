//! Minimal ASN.1 DER reader and writer
//!
//! Reading is limited to the three universal tags an EC private key is
//! built from: SEQUENCE, INTEGER and OCTET STRING. The writer is generic
//! over the tag byte so it can also emit the OBJECT IDENTIFIERs of a PKCS#8
//! algorithm identifier.

use crate::error::{KeyError, Result};

/// DER tag of an OBJECT IDENTIFIER. Written, never read.
pub const TAG_OBJECT_IDENTIFIER: u8 = 0x06;

/// Universal tags the reader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `0x02`
    Integer,
    /// `0x04`
    OctetString,
    /// `0x30`, constructed
    Sequence,
}

impl Tag {
    /// The identifier octet for this tag
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Tag::Integer => 0x02,
            Tag::OctetString => 0x04,
            Tag::Sequence => 0x30,
        }
    }
}

/// One DER tag-length-value node borrowed from its input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asn1Value<'a> {
    /// Identifier octet
    pub tag: u8,
    /// Content length, always `content.len()`
    pub length: usize,
    /// Content octets
    pub content: &'a [u8],
}

/// Read the TLV at `pos`, requiring its tag to be `expected`.
///
/// Returns the content octets and the offset just past the element.
///
/// # Errors
/// - [`KeyError::Asn1TagMismatch`] if the tag byte differs from `expected`
/// - [`KeyError::Asn1Truncated`] if the element extends past `buf`
/// - [`KeyError::Asn1InvalidLength`] if the length is not canonical DER
pub fn read_tlv(buf: &[u8], pos: usize, expected: Tag) -> Result<(&[u8], usize)> {
    let found = *buf.get(pos).ok_or(KeyError::Asn1Truncated { offset: pos })?;
    if found != expected.byte() {
        return Err(KeyError::Asn1TagMismatch {
            expected: expected.byte(),
            found,
            offset: pos,
        });
    }

    let (length, header_len) = read_length(buf, pos + 1)?;
    let start = pos + 1 + header_len;
    let end = start
        .checked_add(length)
        .filter(|&end| end <= buf.len())
        .ok_or(KeyError::Asn1Truncated { offset: pos })?;

    Ok((&buf[start..end], end))
}

/// Decode the length field at `offset`, returning `(length, octets used)`.
fn read_length(buf: &[u8], offset: usize) -> Result<(usize, usize)> {
    let first = *buf.get(offset).ok_or(KeyError::Asn1Truncated { offset })?;
    if first & 0x80 == 0 {
        return Ok((usize::from(first), 1));
    }

    // 0x80 alone is the BER indefinite form.
    let count = usize::from(first & 0x7f);
    if count == 0 || count > std::mem::size_of::<usize>() {
        return Err(KeyError::Asn1InvalidLength { offset });
    }

    let octets = buf
        .get(offset + 1..offset + 1 + count)
        .ok_or(KeyError::Asn1Truncated { offset })?;
    if octets[0] == 0 {
        return Err(KeyError::Asn1InvalidLength { offset });
    }

    let length = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    if length < 0x80 {
        return Err(KeyError::Asn1InvalidLength { offset });
    }

    Ok((length, 1 + count))
}

/// Sequential reader over the elements of one DER buffer
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    /// Start reading at the beginning of `buf`
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Read the next element, which must carry `expected`
    ///
    /// # Errors
    /// As for [`read_tlv`]. The cursor does not move on error.
    pub fn read(&mut self, expected: Tag) -> Result<Asn1Value<'a>> {
        let (content, next) = read_tlv(self.buf, self.pos, expected)?;
        self.pos = next;
        Ok(Asn1Value {
            tag: expected.byte(),
            length: content.len(),
            content,
        })
    }

    /// Offset of the next unread byte
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pos >= self.buf.len()
    }
}

/// Encode a DER length field.
///
/// Lengths below 128 use the short form; larger ones are `0x80 | n`
/// followed by the `n` significant big-endian octets.
#[must_use]
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }

    let be = len.to_be_bytes();
    let leading_zeros = be.iter().take_while(|&&b| b == 0).count();
    let significant = &be[leading_zeros..];

    let mut out = Vec::with_capacity(1 + significant.len());
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Prepend `tag` and the encoded length to `content`.
#[must_use]
pub fn wrap_tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let length = encode_length(content.len());
    let mut out = Vec::with_capacity(1 + length.len() + content.len());
    out.push(tag);
    out.extend_from_slice(&length);
    out.extend_from_slice(content);
    out
}

/// Concatenate already-encoded elements.
#[must_use]
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}
