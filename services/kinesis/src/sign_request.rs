use crate::constants::{
    AWS4_HMAC_SHA256, AWS4_REQUEST, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, X_AMZ_DATE,
    X_AMZ_SECURITY_TOKEN, X_AMZ_TARGET,
};
use crate::scope::{signing_time, Scope};
use crate::{Config, Credential};
use http::request::Parts;
use http::{header, HeaderValue};
use kinesign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use kinesign_core::time::{format_iso8601, DateTime};
use kinesign_core::{clone_parts, Result, SignRequest, SignableBody, SigningRequest};
use log::debug;
use percent_encoding::utf8_percent_encode;
use std::fmt::Write;

/// Headers that take part in the signature whenever the request carries them.
///
/// `host` is always signed and handled separately, since it may come from the URI.
const SIGNED_HEADERS: [&str; 5] = [
    "authorization",
    "content-type",
    "date",
    "user-agent",
    X_AMZ_TARGET,
];

/// RequestSigner that implement AWS SigV4 for kinesis JSON requests.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signing time is read from the request's `Date` header, so the same request signed
/// with the same credential always gets the same `Authorization` header.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    region: Option<String>,
    service: Option<String>,
}

impl RequestSigner {
    /// Create a new signer that derives region and service from the request host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signer with the overrides from config.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            region: cfg.region.clone(),
            service: cfg.service.clone(),
        }
    }

    /// Use this region instead of the one derived from the request host.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Use this service instead of the one derived from the request host.
    pub fn with_service(mut self, service: &str) -> Self {
        self.service = Some(service.to_string());
        self
    }

    /// Sign the request in place.
    ///
    /// The body is buffered for hashing and stays readable afterwards. On success the
    /// request carries `Authorization`, `X-Amz-Date`, a `Date` rewritten to ISO8601
    /// basic form and, for temporary credentials, `X-Amz-Security-Token`. On error the
    /// headers are left exactly as they were.
    pub fn sign<B: SignableBody>(
        &self,
        req: &mut http::Request<B>,
        cred: &Credential,
    ) -> Result<()> {
        let payload = req.body_mut().buffer()?;

        let mut parts = clone_parts(req)?;
        self.sign_parts(&mut parts, &payload, cred)?;

        *req.headers_mut() = parts.headers;
        Ok(())
    }

    fn sign_parts(&self, parts: &mut Parts, payload: &[u8], cred: &Credential) -> Result<()> {
        let mut signed_req = SigningRequest::build(parts)?;
        let now = signing_time(&signed_req.headers)?;

        let scope = Scope::resolve(
            signed_req.authority.host(),
            now,
            self.region.as_deref(),
            self.service.as_deref(),
        );
        debug!("calculated scope: {scope}");

        // The Date header is signed in the same form as the request timestamp.
        let amz_date = HeaderValue::try_from(format_iso8601(now))?;
        signed_req.headers.insert(header::DATE, amz_date.clone());

        let canonical_headers = canonical_headers(&signed_req)?;
        let signed_headers = canonical_headers
            .iter()
            .map(|(k, _)| *k)
            .collect::<Vec<_>>()
            .join(";");

        let creq = canonical_request_string(&signed_req, &canonical_headers, payload)?;
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(now, &scope, &creq)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(&cred.secret_access_key, &scope);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "{AWS4_HMAC_SHA256} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            cred.access_key_id,
        ))?;
        authorization.set_sensitive(true);

        let token = match &cred.session_token {
            Some(token) => {
                let mut value = HeaderValue::from_str(token)?;
                // Set token value sensitive to avoid leaking.
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        // Nothing below can fail.
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);
        signed_req.headers.insert(X_AMZ_DATE, amz_date);
        match token {
            Some(value) => {
                signed_req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
            }
            None => {
                signed_req.headers.remove(X_AMZ_SECURITY_TOKEN);
            }
        }

        signed_req.apply(parts);
        Ok(())
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut Parts,
        payload: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            debug!("no credential provided, request left unsigned");
            return Ok(());
        };

        self.sign_parts(req, payload, cred)
    }
}

/// Collect the signed headers as sorted `(name, value)` pairs.
fn canonical_headers(ctx: &SigningRequest) -> Result<Vec<(&'static str, String)>> {
    let mut headers = Vec::with_capacity(SIGNED_HEADERS.len() + 1);
    for name in SIGNED_HEADERS {
        if let Some(value) = ctx.header_value_joined(name)? {
            headers.push((name, value));
        }
    }

    let host = match ctx.header_value_joined("host")? {
        Some(v) => v,
        None => ctx.authority.as_str().to_string(),
    };
    headers.push(("host", host));

    // Sort via header name.
    headers.sort_unstable_by(|(l, _), (r, _)| l.cmp(r));
    Ok(headers)
}

fn canonical_request_string(
    ctx: &SigningRequest,
    headers: &[(&'static str, String)],
    payload: &[u8],
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert encoded path
    writeln!(f, "{}", canonical_uri(ctx)?)?;
    // Insert query
    writeln!(f, "{}", canonical_query_string(&ctx.query))?;
    // Insert signed headers
    for (name, value) in headers {
        writeln!(f, "{name}:{value}")?;
    }
    writeln!(f)?;
    writeln!(
        f,
        "{}",
        headers
            .iter()
            .map(|(k, _)| *k)
            .collect::<Vec<_>>()
            .join(";")
    )?;
    write!(f, "{}", hex_sha256(payload))?;

    Ok(f)
}

fn canonical_uri(ctx: &SigningRequest) -> Result<String> {
    let path = ctx.path_percent_decoded()?;
    if path.is_empty() {
        return Ok("/".to_string());
    }

    Ok(utf8_percent_encode(&path, &AWS_URI_ENCODE_SET).to_string())
}

fn canonical_query_string(query: &[(String, String)]) -> String {
    let mut query = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by encoded name, then encoded value.
    query.sort();

    query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn string_to_sign(now: DateTime, scope: &Scope, creq: &str) -> Result<String> {
    // StringToSign:
    //
    // AWS4-HMAC-SHA256
    // 20131128T150405Z
    // 20131128/<region>/<service>/aws4_request
    // <hashed_canonical_request>
    let mut f = String::new();
    writeln!(f, "{AWS4_HMAC_SHA256}")?;
    writeln!(f, "{}", format_iso8601(now))?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(creq.as_bytes()))?;
    Ok(f)
}

fn generate_signing_key(secret: &str, scope: &Scope) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), scope.date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), scope.region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), scope.service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
