//! Request path decoding shared by chapter and short-link lookups.

use std::borrow::Cow;

use axum::extract::Request;
use percent_encoding::percent_decode_str;

/// The request path with percent-escapes decoded. A path whose escapes do
/// not decode to UTF-8 is returned as received.
#[must_use]
pub fn decoded_path(request: &Request) -> Cow<'_, str> {
    let path = request.uri().path();
    percent_decode_str(path)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;

    fn request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_plain_path_is_borrowed() {
        let request = request("/stories/river");

        let path = decoded_path(&request);

        assert!(matches!(path, Cow::Borrowed("/stories/river")));
    }

    #[test]
    fn test_escapes_are_decoded() {
        assert_eq!(decoded_path(&request("/stories/the%20end")), "/stories/the end");
        assert_eq!(decoded_path(&request("/stories/caf%C3%A9")), "/stories/café");
    }

    #[test]
    fn test_invalid_utf8_escape_is_kept_raw() {
        assert_eq!(decoded_path(&request("/stories/%FF")), "/stories/%FF");
    }
}
