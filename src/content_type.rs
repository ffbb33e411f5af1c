use crate::constants::{content_type, header, rule};
use crate::context::RequestContext;
use crate::result::{Rejection, RejectionReason};
use crate::rule::Rule;

/// Actions are posted as form submissions. A content-type that names none of
/// the accepted encodings is rejected; a missing content-type is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeRule {
    accepted: Vec<String>,
}

impl ContentTypeRule {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Substring match, so parameters such as `; boundary=...` are tolerated.
    pub fn accepts(&self, value: &str) -> bool {
        self.accepted
            .iter()
            .any(|accepted| value.contains(accepted.as_str()))
    }
}

impl Default for ContentTypeRule {
    fn default() -> Self {
        Self::list([
            content_type::MULTIPART_FORM_DATA,
            content_type::TEXT_PLAIN,
            content_type::FORM_URLENCODED,
        ])
    }
}

impl Rule for ContentTypeRule {
    fn name(&self) -> &'static str {
        rule::CONTENT_TYPE
    }

    fn check(&self, request: &RequestContext<'_>, _action_id: &str) -> Result<(), Rejection> {
        match request.content_type {
            Some(value) if !value.is_empty() && !self.accepts(value) => Err(Rejection::new(
                rule::CONTENT_TYPE,
                RejectionReason::InvalidContentType,
            )
            .with_evidence(header::CONTENT_TYPE, Some(value))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "content_type_test.rs"]
mod content_type_test;
