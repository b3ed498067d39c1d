use http::uri::Authority;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// It's a snapshot of the request taken before signing. Changes are made on the snapshot
/// and only written back by [`SigningRequest::apply`], so a failed signing leaves the
/// original request untouched.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        let authority = parts
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| Error::request_invalid("request without authority is invalid for signing"))?;

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority,
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            headers: parts.headers.clone(),
        })
    }

    /// Write the signed headers back into http::request::Parts.
    pub fn apply(self, parts: &mut http::request::Parts) {
        parts.headers = self.headers;
    }

    /// Get all values of a header joined by `,`, with surrounding whitespace trimmed.
    ///
    /// Returns `None` if the header is absent.
    pub fn header_value_joined(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.headers.get_all(key).iter().peekable();
        if values.peek().is_none() {
            return Ok(None);
        }

        let mut s = String::new();
        for (idx, value) in values.enumerate() {
            if idx != 0 {
                s.push(',');
            }
            s.push_str(Self::header_value_normalize(value)?);
        }

        Ok(Some(s))
    }

    /// Normalize header value by trimming surrounding whitespace.
    ///
    /// The value is taken as its raw bytes, so non-ASCII UTF-8 text is kept as is. Values
    /// that are not valid UTF-8 can't be signed.
    pub fn header_value_normalize(v: &HeaderValue) -> Result<&str> {
        let value = std::str::from_utf8(v.as_bytes()).map_err(|e| {
            Error::request_invalid("header value is not valid utf-8").with_source(e)
        })?;
        Ok(value.trim_matches(|c| c == ' ' || c == '\t'))
    }

    /// Get the path percent decoded.
    pub fn path_percent_decoded(&self) -> Result<String> {
        percent_encoding::percent_decode_str(&self.path)
            .decode_utf8()
            .map(|v| v.into_owned())
            .map_err(|e| {
                Error::request_invalid(format!("path '{}' is not valid utf-8", self.path))
                    .with_source(e)
            })
    }
}

/// Clone the head of a request into standalone parts.
///
/// Extensions are not carried over.
pub fn clone_parts<B>(req: &http::Request<B>) -> Result<http::request::Parts> {
    let mut builder = http::Request::builder()
        .method(req.method().clone())
        .uri(req.uri().clone())
        .version(req.version());
    if let Some(headers) = builder.headers_mut() {
        *headers = req.headers().clone();
    }

    Ok(builder.body(())?.into_parts().0)
}
