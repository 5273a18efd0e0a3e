use std::str;

use http::HeaderName;
use log::debug;

use crate::character_types::{find_invalid, is_cookie_octet, is_tchar};
use crate::cookie_octets;
use crate::error::Error;

/// Every byte accepted by either grammar is ASCII.
fn ascii_str(bytes: &[u8], offset: usize) -> Result<&str, Error> {
    str::from_utf8(bytes).map_err(|e| Error::InvalidByte {
        byte: bytes[e.valid_up_to()],
        offset: offset + e.valid_up_to(),
    })
}

fn token(bytes: &[u8]) -> Result<&str, Error> {
    if bytes.is_empty() {
        return Err(Error::Empty);
    }
    if let Some(i) = find_invalid(bytes, is_tchar) {
        return Err(Error::InvalidByte { byte: bytes[i], offset: i });
    }
    ascii_str(bytes, 0)
}

fn cookie_value(bytes: &[u8]) -> Result<&str, Error> {
    let (offset, inner) = cookie_octets(bytes)?;
    if let Some(i) = find_invalid(inner, is_cookie_octet) {
        return Err(Error::InvalidByte { byte: inner[i], offset: offset + i });
    }
    ascii_str(inner, offset)
}

/// Like [`is_token`](crate::is_token), but tells why the value was rejected.
///
/// ```
/// use httpchars::{check_token, Error};
///
/// assert_eq!(check_token("Content-Type"), Ok("Content-Type"));
/// assert_eq!(check_token("a,b"), Err(Error::InvalidByte { byte: b',', offset: 1 }));
/// ```
pub fn check_token<B: AsRef<[u8]> + ?Sized>(value: &B) -> Result<&str, Error> {
    token(value.as_ref()).map_err(|err| {
        debug!("rejected token: {}", err);
        err
    })
}

/// Like [`is_cookie_value`](crate::is_cookie_value), but tells why the value
/// was rejected.
///
/// On success, returns the value without its surrounding DQUOTEs (if any).
///
/// ```
/// use httpchars::{check_cookie_value, Error};
///
/// assert_eq!(check_cookie_value("\"abc\""), Ok("abc"));
/// assert_eq!(check_cookie_value("\"\""), Ok(""));
/// assert_eq!(check_cookie_value("\"abc"), Err(Error::UnterminatedQuote));
/// ```
pub fn check_cookie_value<B: AsRef<[u8]> + ?Sized>(value: &B) -> Result<&str, Error> {
    cookie_value(value.as_ref()).map_err(|err| {
        debug!("rejected cookie value: {}", err);
        err
    })
}

/// Validates a token and turns it into a header field name.
///
/// The `http` crate lowercases header names.
pub fn to_header_name<B: AsRef<[u8]> + ?Sized>(value: &B) -> Result<HeaderName, Error> {
    let name = check_token(value)?;
    // never fails, `tchar` is a subset of what `HeaderName` accepts
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidByte { byte: name.as_bytes()[0], offset: 0 })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_cookie_value, is_token};
    use http::HeaderValue;

    #[test]
    fn token_errors() {
        assert_eq!(check_token(""), Err(Error::Empty));
        assert_eq!(check_token("\""), Err(Error::InvalidByte { byte: b'"', offset: 0 }));
        assert_eq!(check_token("X-Foo Bar"), Err(Error::InvalidByte { byte: b' ', offset: 5 }));
        assert_eq!(check_token(&[b'a', 0xc3, 0xa9][..]), Err(Error::InvalidByte { byte: 0xc3, offset: 1 }));
        assert_eq!(check_token("!#$%&'*+-.^_`|~"), Ok("!#$%&'*+-.^_`|~"));
    }

    #[test]
    fn cookie_value_errors() {
        assert_eq!(check_cookie_value(""), Err(Error::Empty));
        assert_eq!(check_cookie_value("\""), Err(Error::UnterminatedQuote));
        assert_eq!(check_cookie_value("\"abc"), Err(Error::UnterminatedQuote));
        assert_eq!(check_cookie_value("a;b"), Err(Error::InvalidByte { byte: b';', offset: 1 }));
        // offsets are relative to the quoted input
        assert_eq!(check_cookie_value("\"a b\""), Err(Error::InvalidByte { byte: b' ', offset: 2 }));
        assert_eq!(check_cookie_value("\"a\"b\""), Err(Error::InvalidByte { byte: b'"', offset: 2 }));
        // a trailing quote alone is just an invalid octet
        assert_eq!(check_cookie_value("abc\""), Err(Error::InvalidByte { byte: b'"', offset: 3 }));
    }

    #[test]
    fn cookie_value_is_unquoted() {
        assert_eq!(check_cookie_value("\"\""), Ok(""));
        assert_eq!(check_cookie_value("\"abc\""), Ok("abc"));
        assert_eq!(check_cookie_value("abc"), Ok("abc"));
        assert_eq!(check_cookie_value("YWJj/+=="), Ok("YWJj/+=="));
    }

    #[test]
    fn agrees_with_predicates() {
        let samples: Vec<&[u8]> = vec![
            b"",
            b"\"",
            b"\"\"",
            b"\"\"\"",
            b"a",
            b"Content-Type",
            b"a,b",
            b"a;b",
            b"a\\b",
            b"a b",
            b"\"abc\"",
            b"\"abc",
            b"abc\"",
            b"(comment)",
            b"\x00",
            b"\x7f",
            b"\xff",
        ];
        for s in samples {
            assert_eq!(check_token(s).is_ok(), is_token(s), "{:?}", s);
            assert_eq!(check_cookie_value(s).is_ok(), is_cookie_value(s), "{:?}", s);
        }
    }

    #[test]
    fn header_names() {
        assert_eq!(to_header_name("Content-Type").unwrap(), http::header::CONTENT_TYPE);
        assert_eq!(to_header_name("X-Custom_Header").unwrap().as_str(), "x-custom_header");
        assert_eq!(to_header_name("Host:"), Err(Error::InvalidByte { byte: b':', offset: 4 }));
        assert_eq!(to_header_name(""), Err(Error::Empty));
    }

    #[test]
    fn accepts_header_values() {
        let value = HeaderValue::from_static("\"session-id\"");
        assert_eq!(check_cookie_value(&value), Ok("session-id"));
        assert!(check_token(&value).is_err());
    }
}
