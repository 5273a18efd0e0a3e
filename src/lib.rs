#![forbid(unsafe_code)]

//! Strict validation of HTTP tokens and cookie values
//!
//! See [RFC 7230](https://tools.ietf.org/html/rfc7230#section-3.2.6) for
//! tokens and [RFC 6265](https://tools.ietf.org/html/rfc6265#section-4.1.1)
//! for cookie values.
//!
//! This crate only answers “is this byte string a valid token / cookie
//! value?”. It doesn’t split headers, decode percent-encoding, validate
//! cookie names or limit lengths.
//!
//! # Simple example
//!
//! ```
//! assert!(httpchars::is_token("Content-Type"));
//! assert!(!httpchars::is_token("a,b"));
//!
//! assert!(httpchars::is_cookie_value("\"abc\""));
//! assert!(httpchars::is_cookie_value("\"\""));
//! assert!(!httpchars::is_cookie_value("a;b"));
//! ```
//!
//! # With the `http` crate
//!
//! ```
//! use http::HeaderValue;
//!
//! let value = HeaderValue::from_static("s3cr3t");
//! assert!(httpchars::is_cookie_value(&value));
//!
//! let name = httpchars::to_header_name("X-Request-Id").unwrap();
//! assert_eq!(name, "x-request-id");
//! ```

mod character_types;
pub use character_types::{
    is_tchar,
    is_cookie_octet,
};
use character_types::DQUOTE;

mod check;
pub use check::{
    check_token,
    check_cookie_value,
    to_header_name,
};

mod error;
pub use error::Error;


/// Returns `true` if `value` is a `token` (`1*tchar`).
///
/// The empty string is not a token.
pub fn is_token(value: impl AsRef<[u8]>) -> bool {
    let bytes = value.as_ref();
    !bytes.is_empty() && bytes.iter().all(|&b| is_tchar(b))
}

/// Returns `true` if `value` is a non-empty `cookie-value`.
///
/// A value starting with DQUOTE must also end with one, and only the
/// bytes between the two quotes are checked.
pub fn is_cookie_value(value: impl AsRef<[u8]>) -> bool {
    match cookie_octets(value.as_ref()) {
        Ok((_, inner)) => inner.iter().all(|&b| is_cookie_octet(b)),
        Err(_) => false,
    }
}

/// Strips the optional DQUOTEs around a cookie value.
///
/// Returns the offset of the first interior byte in `bytes` and the
/// interior itself.
pub(crate) fn cookie_octets(bytes: &[u8]) -> Result<(usize, &[u8]), Error> {
    match bytes {
        [] => Err(Error::Empty),
        [DQUOTE, inner @ .., DQUOTE] => Ok((1, inner)),
        [DQUOTE, ..] => Err(Error::UnterminatedQuote),
        _ => Ok((0, bytes)),
    }
}
