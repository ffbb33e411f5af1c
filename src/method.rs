use crate::constants::{field, method, rule};
use crate::context::RequestContext;
use crate::result::{Rejection, RejectionReason};
use crate::rule::Rule;

/// The method an action must be invoked with. Compared exactly, without case
/// folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRule {
    allowed: String,
}

impl MethodRule {
    pub fn new<S: Into<String>>(allowed: S) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }
}

impl Default for MethodRule {
    fn default() -> Self {
        Self::new(method::POST)
    }
}

impl Rule for MethodRule {
    fn name(&self) -> &'static str {
        rule::METHOD
    }

    fn check(&self, request: &RequestContext<'_>, _action_id: &str) -> Result<(), Rejection> {
        if request.method != self.allowed {
            return Err(
                Rejection::new(rule::METHOD, RejectionReason::MethodNotAllowed)
                    .with_evidence(field::METHOD, Some(request.method)),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
