use crate::db::codec::{self, CodecError};

/// A user as submitted for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub press_times: Vec<i64>,
    pub interval_times: Vec<i64>,
}

/// Stored data for a single user, as returned by a lookup
///
/// The username is the lookup key and is not repeated here. Holds the
/// plaintext password, so it is never serialized into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub password: String,
    pub press_times: Vec<i64>,
    pub interval_times: Vec<i64>,
}

/// Raw `users` row with every column still in its stored BLOB form
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub password: Vec<u8>,
    pub press_times: Vec<u8>,
    pub interval_times: Vec<u8>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = CodecError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            password: String::from_utf8(row.password)?,
            press_times: codec::decode(&row.press_times)?,
            interval_times: codec::decode(&row.interval_times)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_decodes_into_record() {
        let row = UserRow {
            password: b"p1".to_vec(),
            press_times: codec::encode(&[10, 20]).unwrap(),
            interval_times: codec::encode(&[5]).unwrap(),
        };

        let record = UserRecord::try_from(row).unwrap();
        assert_eq!(record.password, "p1");
        assert_eq!(record.press_times, vec![10, 20]);
        assert_eq!(record.interval_times, vec![5]);
    }

    #[test]
    fn test_row_with_corrupt_blob_fails() {
        let row = UserRow {
            password: b"p1".to_vec(),
            press_times: vec![0xde, 0xad],
            interval_times: codec::encode(&[]).unwrap(),
        };

        assert!(matches!(
            UserRecord::try_from(row),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_row_with_non_utf8_password_fails() {
        let row = UserRow {
            password: vec![0xff, 0xfe],
            press_times: codec::encode(&[]).unwrap(),
            interval_times: codec::encode(&[]).unwrap(),
        };

        assert!(matches!(
            UserRecord::try_from(row),
            Err(CodecError::PasswordEncoding(_))
        ));
    }
}
