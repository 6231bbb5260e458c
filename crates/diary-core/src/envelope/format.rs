//! Envelope binary framing.
//!
//! ```text
//! offset        size   field
//! 0             2      wrapped key length (u16 BE)
//! 2             wkl    wrapped key (RSA-OAEP-SHA256 ciphertext)
//! 2+wkl         2      iv length (u16 BE)
//! 4+wkl         ivl    iv (GCM nonce)
//! 4+wkl+ivl     rest   ciphertext (AES-256-GCM output, tag appended)
//! ```
//!
//! There is no magic or version byte; the layout must stay bit-compatible
//! with envelopes already written to disk.

use crate::error::{DiaryError, Result};

/// Size of each big-endian length prefix.
pub const LENGTH_PREFIX_LEN: usize = 2;

/// Largest field a length prefix can describe.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// Borrowed view of the three envelope fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    wrapped_key: &'a [u8],
    iv: &'a [u8],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    pub fn new(wrapped_key: &'a [u8], iv: &'a [u8], ciphertext: &'a [u8]) -> Self {
        Self {
            wrapped_key,
            iv,
            ciphertext,
        }
    }

    /// Split serialized bytes into fields without copying.
    ///
    /// A zero-length ciphertext is accepted here; whether it authenticates
    /// is the cipher's concern.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::MalformedEnvelope` if the input ends before a
    /// length prefix, or before the number of bytes a prefix declares.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let mut offset = 0;
        let wrapped_key = read_prefixed(bytes, &mut offset, "wrapped key")?;
        let iv = read_prefixed(bytes, &mut offset, "iv")?;
        let ciphertext = &bytes[offset..];
        Ok(Self {
            wrapped_key,
            iv,
            ciphertext,
        })
    }

    /// Serialize into the on-disk layout.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Encryption` if the wrapped key or iv is longer
    /// than a `u16` prefix can describe.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        write_prefixed(&mut out, self.wrapped_key, "wrapped key")?;
        write_prefixed(&mut out, self.iv, "iv")?;
        out.extend_from_slice(self.ciphertext);
        Ok(out)
    }

    /// Total serialized length.
    pub fn encoded_len(&self) -> usize {
        2 * LENGTH_PREFIX_LEN + self.wrapped_key.len() + self.iv.len() + self.ciphertext.len()
    }

    pub fn wrapped_key(&self) -> &'a [u8] {
        self.wrapped_key
    }

    pub fn iv(&self) -> &'a [u8] {
        self.iv
    }

    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

fn read_prefixed<'a>(bytes: &'a [u8], offset: &mut usize, field: &str) -> Result<&'a [u8]> {
    let prefix_end = *offset + LENGTH_PREFIX_LEN;
    let prefix = bytes.get(*offset..prefix_end).ok_or_else(|| {
        DiaryError::MalformedEnvelope(format!(
            "truncated before {} length at offset {} ({} bytes total)",
            field,
            offset,
            bytes.len()
        ))
    })?;
    let declared = u16::from_be_bytes([prefix[0], prefix[1]]) as usize;

    let field_end = prefix_end + declared;
    let value = bytes.get(prefix_end..field_end).ok_or_else(|| {
        DiaryError::MalformedEnvelope(format!(
            "{} declares {} bytes but only {} remain",
            field,
            declared,
            bytes.len() - prefix_end
        ))
    })?;
    *offset = field_end;
    Ok(value)
}

fn write_prefixed(out: &mut Vec<u8>, value: &[u8], field: &str) -> Result<()> {
    let len = u16::try_from(value.len()).map_err(|_| {
        DiaryError::Encryption(format!(
            "{} is {} bytes, over the {} byte limit",
            field,
            value.len(),
            MAX_FIELD_LEN
        ))
    })?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(value);
    Ok(())
}
