//! Conversion of user input into the string sent to the lookup API.

use sha2::{Digest, Sha256};

use crate::model::QueryKind;

/// Returns the canonical lookup string for `raw_input`.
///
/// Emails and usernames are passed through untouched. Hashed emails are the
/// lowercase hex SHA-256 of the lowercased, trimmed input.
///
/// # Example
///
/// ```
/// use breachbot::{normalize, QueryKind};
///
/// let digest = normalize(QueryKind::HashedEmail, "Foo@Bar.com ");
/// assert_eq!(digest, normalize(QueryKind::HashedEmail, "foo@bar.com"));
/// assert_eq!(normalize(QueryKind::Email, "Foo@Bar.com "), "Foo@Bar.com ");
/// ```
pub fn normalize(kind: QueryKind, raw_input: &str) -> String {
    match kind {
        QueryKind::Email | QueryKind::Username => raw_input.to_string(),
        QueryKind::HashedEmail => hash_email(raw_input),
    }
}

fn hash_email(email: &str) -> String {
    let lowered = email.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let digest = Sha256::digest(trimmed.as_bytes());
    hex::encode(digest)
}
