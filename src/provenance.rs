use crate::constants::{header, rule};
use crate::context::RequestContext;
use crate::result::{Rejection, RejectionReason};
use crate::rule::Rule;

/// Origin prefixes treated as "this application" for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins {
    entries: Vec<String>,
}

impl AllowedOrigins {
    /// `app_url` (when set) or `dev_origin` (when not), together with the
    /// request's own host under both schemes. A missing host contributes
    /// nothing: `https://` alone would prefix every secure origin.
    pub fn for_request(app_url: Option<&str>, dev_origin: &str, host: Option<&str>) -> Self {
        let host = host.filter(|host| !host.is_empty());
        let mut entries = Vec::with_capacity(3);

        if let Some(app_url) = app_url {
            entries.push(app_url.to_owned());
        }
        if let Some(host) = host {
            entries.push(format!("https://{host}"));
            entries.push(format!("http://{host}"));
        }
        if app_url.is_none() {
            entries.push(dev_origin.to_owned());
        }

        Self { entries }
    }

    /// Literal, case-sensitive prefix test against every entry.
    pub fn permits(&self, candidate: &str) -> bool {
        self.entries
            .iter()
            .any(|allowed| candidate.starts_with(allowed.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

/// Rejects action calls whose `origin` and `referer` both fail to match the
/// application. Same-origin action posts always send one of them.
#[derive(Debug, Clone)]
pub struct ProvenanceRule {
    app_url: Option<String>,
    dev_origin: String,
}

impl ProvenanceRule {
    pub fn new(app_url: Option<String>, dev_origin: impl Into<String>) -> Self {
        Self {
            app_url,
            dev_origin: dev_origin.into(),
        }
    }

    pub fn allowed_origins(&self, request: &RequestContext<'_>) -> AllowedOrigins {
        AllowedOrigins::for_request(self.app_url.as_deref(), &self.dev_origin, request.host)
    }
}

impl Rule for ProvenanceRule {
    fn name(&self) -> &'static str {
        rule::PROVENANCE
    }

    fn check(&self, request: &RequestContext<'_>, _action_id: &str) -> Result<(), Rejection> {
        let allowed = self.allowed_origins(request);
        let valid = |value: Option<&str>| value.is_some_and(|value| allowed.permits(value));

        if valid(request.origin) || valid(request.referer) {
            return Ok(());
        }

        Err(Rejection::new(rule::PROVENANCE, RejectionReason::Forbidden)
            .with_evidence(header::ORIGIN, request.origin)
            .with_evidence(header::REFERER, request.referer))
    }
}

#[cfg(test)]
#[path = "provenance_test.rs"]
mod provenance_test;
