//! Row - the fixed-schema record and its byte encoding.
//!
//! # Layout (291 bytes)
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       4     id (u32, little-endian)
//! 4       32    username (zero-padded)
//! 36      255   email (zero-padded)
//! ```
//!
//! A field that exactly fills its capacity has no terminating zero byte.

use std::borrow::Cow;
use std::fmt;

use crate::common::config::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};
use crate::common::{Error, Result};

/// One record of the table: `(id, username, email)`.
///
/// The text columns are fixed-capacity byte buffers, not strings. Accessors
/// return the bytes up to the first zero byte, or the whole buffer when the
/// value fills it.
///
/// # Example
/// ```
/// use rowdb::Row;
///
/// let row = Row::new(1, "user1", "person1@example.com").unwrap();
/// let bytes = row.encode();
/// assert_eq!(Row::decode(&bytes), row);
/// assert_eq!(row.to_string(), "(1, user1, person1@example.com)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: [u8; USERNAME_SIZE],
    email: [u8; EMAIL_SIZE],
}

impl Row {
    /// Build a row, copying the text columns into their fixed buffers.
    ///
    /// # Errors
    /// Returns `Error::FieldTooLong` if `username` exceeds 32 bytes or
    /// `email` exceeds 255 bytes.
    pub fn new(id: u32, username: impl AsRef<[u8]>, email: impl AsRef<[u8]>) -> Result<Self> {
        let mut row = Row {
            id,
            username: [0u8; USERNAME_SIZE],
            email: [0u8; EMAIL_SIZE],
        };
        fill_field(&mut row.username, "username", username.as_ref())?;
        fill_field(&mut row.email, "email", email.as_ref())?;
        Ok(row)
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Username bytes, without zero padding.
    #[inline]
    pub fn username(&self) -> &[u8] {
        trim_padding(&self.username)
    }

    /// Email bytes, without zero padding.
    #[inline]
    pub fn email(&self) -> &[u8] {
        trim_padding(&self.email)
    }

    /// Username as text; invalid UTF-8 is replaced.
    pub fn username_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.username())
    }

    /// Email as text; invalid UTF-8 is replaced.
    pub fn email_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.email())
    }

    /// Encode into a fresh `ROW_SIZE` buffer.
    pub fn encode(&self) -> [u8; ROW_SIZE] {
        let mut buf = [0u8; ROW_SIZE];
        self.encode_into(&mut buf);
        buf
    }

    /// Encode into a row slot.
    pub fn encode_into(&self, dst: &mut [u8; ROW_SIZE]) {
        dst[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        dst[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE].copy_from_slice(&self.username);
        dst[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE].copy_from_slice(&self.email);
    }

    /// Decode a row from a row slot.
    ///
    /// Fields are copied verbatim; no validation is done.
    pub fn decode(src: &[u8; ROW_SIZE]) -> Self {
        let mut id_bytes = [0u8; ID_SIZE];
        id_bytes.copy_from_slice(&src[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        let mut row = Row {
            id: u32::from_le_bytes(id_bytes),
            username: [0u8; USERNAME_SIZE],
            email: [0u8; EMAIL_SIZE],
        };
        row.username
            .copy_from_slice(&src[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        row.email
            .copy_from_slice(&src[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);
        row
    }
}

fn fill_field(dst: &mut [u8], field: &'static str, value: &[u8]) -> Result<()> {
    if value.len() > dst.len() {
        return Err(Error::FieldTooLong {
            field,
            len: value.len(),
            capacity: dst.len(),
        });
    }
    dst[..value.len()].copy_from_slice(value);
    Ok(())
}

fn trim_padding(field: &[u8]) -> &[u8] {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    &field[..end]
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.id,
            self.username_lossy(),
            self.email_lossy()
        )
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("username", &self.username_lossy())
            .field("email", &self.email_lossy())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_byte_layout() {
        let row = Row::new(0x04030201, "ab", "c@d").unwrap();
        let bytes = row.encode();

        assert_eq!(&bytes[0..4], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[4..6], b"ab");
        assert!(bytes[6..36].iter().all(|&b| b == 0));
        assert_eq!(&bytes[36..39], b"c@d");
        assert!(bytes[39..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_max_length_fields_have_no_terminator() {
        let username = "u".repeat(USERNAME_SIZE);
        let email = "e".repeat(EMAIL_SIZE);
        let row = Row::new(7, &username, &email).unwrap();

        let bytes = row.encode();
        assert_eq!(bytes[EMAIL_OFFSET - 1], b'u');
        assert_eq!(bytes[ROW_SIZE - 1], b'e');

        let decoded = Row::decode(&bytes);
        assert_eq!(decoded.username(), username.as_bytes());
        assert_eq!(decoded.email(), email.as_bytes());
    }

    #[test]
    fn test_oversize_fields_rejected() {
        let too_long = "a".repeat(USERNAME_SIZE + 1);
        match Row::new(1, &too_long, "x") {
            Err(Error::FieldTooLong {
                field,
                len,
                capacity,
            }) => {
                assert_eq!(field, "username");
                assert_eq!(len, 33);
                assert_eq!(capacity, 32);
            }
            other => panic!("Expected FieldTooLong, got {:?}", other),
        }

        let too_long = "a".repeat(EMAIL_SIZE + 1);
        assert!(matches!(
            Row::new(1, "x", &too_long),
            Err(Error::FieldTooLong { field: "email", .. })
        ));
    }

    #[test]
    fn test_encode_into_rewrites_whole_slot() {
        let mut slot = [0xFFu8; ROW_SIZE];
        Row::new(9, "nine", "n@9").unwrap().encode_into(&mut slot);

        // Padding is written too, so stale bytes cannot leak into a field.
        let decoded = Row::decode(&slot);
        assert_eq!(decoded.id(), 9);
        assert_eq!(decoded.username(), b"nine");
        assert_eq!(decoded.email(), b"n@9");
        assert_eq!(slot, Row::new(9, "nine", "n@9").unwrap().encode());
    }

    #[test]
    fn test_decode_zeroed_slot() {
        let row = Row::decode(&[0u8; ROW_SIZE]);
        assert_eq!(row.id(), 0);
        assert!(row.username().is_empty());
        assert!(row.email().is_empty());
    }

    #[test]
    fn test_display_and_debug() {
        let row = Row::new(1, "user1", "person1@example.com").unwrap();
        assert_eq!(format!("{}", row), "(1, user1, person1@example.com)");
        assert!(format!("{:?}", row).contains("username: \"user1\""));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(
            id in any::<u32>(),
            username in proptest::collection::vec(any::<u8>(), 0..=USERNAME_SIZE),
            email in proptest::collection::vec(any::<u8>(), 0..=EMAIL_SIZE),
        ) {
            let row = Row::new(id, &username, &email).unwrap();
            prop_assert_eq!(Row::decode(&row.encode()), row);
        }
    }
}
