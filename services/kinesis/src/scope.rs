use std::fmt::{Display, Formatter};

use http::header;
use http::HeaderMap;
use kinesign_core::time::{format_date, parse_iso8601, parse_rfc1123, DateTime};
use kinesign_core::{Error, Result};

use crate::constants::AWS4_REQUEST;

/// Endpoint is the host of a request as seen by the credential scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Host shaped like `<service>.<region>.amazonaws.com`.
    Standard {
        /// Service name, the first label.
        service: &'a str,
        /// Region name, the second label.
        region: &'a str,
    },
    /// Any other host. Region and service are left empty.
    Custom,
}

impl<'a> Endpoint<'a> {
    /// Classify a host name. The host must not carry a port.
    pub fn parse(host: &'a str) -> Self {
        let labels: Vec<&str> = host.split('.').collect();
        match labels.as_slice() {
            [service, region, domain, tld]
                if !service.is_empty()
                    && !region.is_empty()
                    && domain.eq_ignore_ascii_case("amazonaws")
                    && tld.eq_ignore_ascii_case("com") =>
            {
                Endpoint::Standard {
                    service: *service,
                    region: *region,
                }
            }
            _ => Endpoint::Custom,
        }
    }
}

/// Scope binds a signature to a day, a region and a service.
///
/// Displays as the credential scope string `<date>/<region>/<service>/aws4_request`.
/// Region and service may be empty, which renders as `<date>///aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Date in `YYYYMMDD`.
    pub date: String,
    /// Region, possibly empty.
    pub region: String,
    /// Service, possibly empty.
    pub service: String,
}

impl Scope {
    /// Resolve the scope for a request to `host` signed at `time`.
    ///
    /// `region` and `service` override the values derived from the host independently
    /// of each other.
    pub fn resolve(
        host: &str,
        time: DateTime,
        region: Option<&str>,
        service: Option<&str>,
    ) -> Self {
        let (derived_service, derived_region) = match Endpoint::parse(host) {
            Endpoint::Standard { service, region } => (service, region),
            Endpoint::Custom => ("", ""),
        };

        Scope {
            date: format_date(time),
            region: region.unwrap_or(derived_region).to_string(),
            service: service.unwrap_or(derived_service).to_string(),
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, AWS4_REQUEST
        )
    }
}

/// Read the signing time from the request's `Date` header.
///
/// The header is expected in RFC1123 form. The ISO8601 basic form written back by an
/// earlier signing is accepted too, so a retried request can be signed again.
pub fn signing_time(headers: &HeaderMap) -> Result<DateTime> {
    let value = headers
        .get(header::DATE)
        .ok_or_else(|| Error::date_invalid("request has no Date header"))?;
    let value = value
        .to_str()
        .map_err(|e| Error::date_invalid("Date header is not valid ascii").with_source(e))?
        .trim();

    parse_rfc1123(value).or_else(|err| parse_iso8601(value).map_err(|_| err))
}
