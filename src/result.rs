use serde::Serialize;
use std::fmt;

/// Why a request was turned away. Each reason maps to one fixed status and
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Neither `origin` nor `referer` matched an allowed origin.
    Forbidden,
    /// The action marker is too short to be a real action hash.
    InvalidActionId,
    /// The action marker carries shell or template metacharacters.
    InvalidRequest,
    /// The content-type is not one a form submission would send.
    InvalidContentType,
    /// Actions are only invoked with `POST`.
    MethodNotAllowed,
}

impl RejectionReason {
    pub fn status(&self) -> u16 {
        match self {
            RejectionReason::MethodNotAllowed => 405,
            _ => 403,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::Forbidden => "Forbidden",
            RejectionReason::InvalidActionId => "Invalid Action ID",
            RejectionReason::InvalidRequest => "Invalid Request",
            RejectionReason::InvalidContentType => "Invalid Content-Type",
            RejectionReason::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An offending header value recorded alongside a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Evidence {
    pub fn new(name: &'static str, value: Option<&str>) -> Self {
        Self {
            name,
            value: value.map(str::to_owned),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}=<absent>", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub rule: &'static str,
    pub reason: RejectionReason,
    pub evidence: Vec<Evidence>,
}

impl Rejection {
    pub fn new(rule: &'static str, reason: RejectionReason) -> Self {
        Self {
            rule,
            reason,
            evidence: Vec::new(),
        }
    }

    pub fn with_evidence(mut self, name: &'static str, value: Option<&str>) -> Self {
        self.evidence.push(Evidence::new(name, value));
        self
    }

    pub fn status(&self) -> u16 {
        self.reason.status()
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.reason.message(),
        }
    }

    /// Comma-separated evidence, suitable for a single log field.
    pub fn evidence_summary(&self) -> String {
        self.evidence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// JSON body sent with a rejection: `{"error": "<message>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Allow => None,
            Verdict::Reject(rejection) => Some(rejection),
        }
    }
}

impl From<Result<(), Rejection>> for Verdict {
    fn from(value: Result<(), Rejection>) -> Self {
        match value {
            Ok(()) => Verdict::Allow,
            Err(rejection) => Verdict::Reject(rejection),
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
