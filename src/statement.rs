//! Statement preparation - turns one input line into a typed operation.
//!
//! Two kinds of input exist:
//! - Meta-commands, which start with `.` and act on the session (`.exit`)
//! - Statements, which act on the table (`insert`, `select`)
//!
//! Input is raw bytes. Only the id has to be text; usernames and emails are
//! stored as given.

use thiserror::Error;

use crate::table::Row;

/// Non-SQL commands like `.exit` are called "meta-commands".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Unrecognized,
}

impl MetaCommand {
    /// Returns `None` if `input` is not a meta-command at all.
    pub fn parse(input: &[u8]) -> Option<MetaCommand> {
        match input {
            b".exit" => Some(MetaCommand::Exit),
            [b'.', ..] => Some(MetaCommand::Unrecognized),
            _ => None,
        }
    }
}

/// A prepared statement, ready to run against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Box<Row>),
    Select,
}

/// Why a line could not be prepared.
///
/// The `Display` text is what the REPL prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("Unrecognized keyword at start of '{0}'.")]
    Unrecognized(String),
}

/// Parse a statement.
///
/// `insert <id> <username> <email>` (tokens after the email are ignored) or
/// exactly `select`. Tokens are separated by runs of spaces; any other
/// byte, tabs included, is part of a token.
///
/// # Example
/// ```
/// use rowdb::statement::{prepare, PrepareError, Statement};
///
/// assert_eq!(prepare(b"select"), Ok(Statement::Select));
/// assert_eq!(prepare(b"insert -1 a b"), Err(PrepareError::NegativeId));
/// ```
pub fn prepare(input: &[u8]) -> Result<Statement, PrepareError> {
    if input.starts_with(b"insert") {
        return prepare_insert(input);
    }
    if input == b"select" {
        return Ok(Statement::Select);
    }
    Err(PrepareError::Unrecognized(
        String::from_utf8_lossy(input).into_owned(),
    ))
}

fn prepare_insert(input: &[u8]) -> Result<Statement, PrepareError> {
    let mut tokens = input
        .split(|&b| b == b' ')
        .filter(|token| !token.is_empty())
        .skip(1);
    let (Some(id), Some(username), Some(email)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(PrepareError::SyntaxError);
    };

    let id: i64 = std::str::from_utf8(id)
        .ok()
        .and_then(|id| id.parse().ok())
        .ok_or(PrepareError::SyntaxError)?;
    if id < 0 {
        return Err(PrepareError::NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| PrepareError::SyntaxError)?;

    let row = Row::new(id, username, email).map_err(|_| PrepareError::StringTooLong)?;
    Ok(Statement::Insert(Box::new(row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};

    fn inserted(input: &str) -> Row {
        match prepare(input.as_bytes()) {
            Ok(Statement::Insert(row)) => *row,
            other => panic!("Expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(MetaCommand::parse(b".exit"), Some(MetaCommand::Exit));
        assert_eq!(MetaCommand::parse(b".tables"), Some(MetaCommand::Unrecognized));
        assert_eq!(MetaCommand::parse(b".exit "), Some(MetaCommand::Unrecognized));
        assert_eq!(MetaCommand::parse(b"select"), None);
        assert_eq!(MetaCommand::parse(b""), None);
    }

    #[test]
    fn test_prepare_select() {
        assert_eq!(prepare(b"select"), Ok(Statement::Select));
        assert_eq!(
            prepare(b"select *"),
            Err(PrepareError::Unrecognized("select *".to_string()))
        );
    }

    #[test]
    fn test_prepare_insert() {
        let row = inserted("insert 1 user1 person1@example.com");
        assert_eq!(row.id(), 1);
        assert_eq!(row.username(), b"user1");
        assert_eq!(row.email(), b"person1@example.com");
    }

    #[test]
    fn test_prepare_insert_ignores_extra_tokens() {
        let row = inserted("insert 2 bob bob@example.com trailing junk");
        assert_eq!(row.email(), b"bob@example.com");
    }

    #[test]
    fn test_prepare_insert_syntax_errors() {
        assert_eq!(prepare(b"insert"), Err(PrepareError::SyntaxError));
        assert_eq!(prepare(b"insert 1 user1"), Err(PrepareError::SyntaxError));
        assert_eq!(prepare(b"insert one a b"), Err(PrepareError::SyntaxError));
        assert_eq!(
            prepare(b"insert 4294967296 a b"),
            Err(PrepareError::SyntaxError)
        );
    }

    #[test]
    fn test_prepare_insert_id_bounds() {
        assert_eq!(prepare(b"insert -1 a b"), Err(PrepareError::NegativeId));
        assert_eq!(inserted("insert 0 a b").id(), 0);
        assert_eq!(inserted("insert 4294967295 a b").id(), u32::MAX);
    }

    #[test]
    fn test_prepare_insert_string_lengths() {
        let name = "a".repeat(COLUMN_USERNAME_SIZE);
        let email = "b".repeat(COLUMN_EMAIL_SIZE);
        let row = inserted(&format!("insert 1 {name} {email}"));
        assert_eq!(row.username(), name.as_bytes());
        assert_eq!(row.email(), email.as_bytes());

        let long_name = "a".repeat(COLUMN_USERNAME_SIZE + 1);
        assert_eq!(
            prepare(format!("insert 1 {long_name} x").as_bytes()),
            Err(PrepareError::StringTooLong)
        );

        let long_email = "b".repeat(COLUMN_EMAIL_SIZE + 1);
        assert_eq!(
            prepare(format!("insert 1 x {long_email}").as_bytes()),
            Err(PrepareError::StringTooLong)
        );
    }

    #[test]
    fn test_negative_id_checked_before_length() {
        let long_name = "a".repeat(COLUMN_USERNAME_SIZE + 1);
        assert_eq!(
            prepare(format!("insert -5 {long_name} x").as_bytes()),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn test_prepare_insert_splits_on_spaces_only() {
        let row = inserted("insert   3   carol   carol@example.com");
        assert_eq!(row.id(), 3);
        assert_eq!(row.username(), b"carol");

        // A tab is not a separator, so this is one token after `insert`.
        assert_eq!(
            prepare(b"insert\t1\tuser1\tperson1@example.com"),
            Err(PrepareError::SyntaxError)
        );
        assert_eq!(
            prepare(b"insert 1\t2 a b"),
            Err(PrepareError::SyntaxError)
        );
        assert_eq!(inserted("insert 4 dan\tx d@e").username(), b"dan\tx");
    }

    #[test]
    fn test_prepare_insert_keeps_raw_bytes() {
        let row = match prepare(b"insert 5 \xE9lodie e@x") {
            Ok(Statement::Insert(row)) => *row,
            other => panic!("Expected insert, got {:?}", other),
        };
        assert_eq!(row.username(), b"\xE9lodie");

        assert_eq!(prepare(b"insert \xFF1 a b"), Err(PrepareError::SyntaxError));
        assert_eq!(
            prepare(b"upd\xFFte"),
            Err(PrepareError::Unrecognized("upd\u{FFFD}te".to_string()))
        );
    }

    #[test]
    fn test_prepare_unrecognized() {
        let err = prepare(b"update 1").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized keyword at start of 'update 1'.");
    }
}
