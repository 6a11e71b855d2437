//! `Authorization: Basic ...` の解析
//!
//! Pure parse; anything that is not a well-formed Basic credential is `None`.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub pass: String,
}

// Keep the password out of logs even when someone writes `?creds`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Parse a raw `Authorization` header value.
///
/// - scheme is matched case-insensitively, surrounding spaces are ignored
/// - the decoded payload splits at the first `:`; the password may contain `:`
pub fn parse_basic(header: &str) -> Option<Credentials> {
    let header = header.trim_matches(' ');
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let encoded = encoded.trim_start_matches(' ');
    if encoded.is_empty() || encoded.contains(' ') {
        return None;
    }

    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, pass) = decoded.split_once(':')?;

    Some(Credentials {
        name: name.to_string(),
        pass: pass.to_string(),
    })
}
