use crate::constants::{FORBIDDEN_ACTION_ID_PATTERN, MIN_ACTION_ID_LENGTH, field, rule};
use crate::context::RequestContext;
use crate::result::{Rejection, RejectionReason};
use crate::rule::Rule;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

static DEFAULT_FORBIDDEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(FORBIDDEN_ACTION_ID_PATTERN).expect("default forbidden pattern compiles")
});

/// Real action ids are long hashes; scanners send short fixed tokens.
///
/// Length is counted in Unicode scalar values (`char`s), not bytes or UTF-16
/// units.
#[derive(Debug, Clone)]
pub struct ActionIdLengthRule {
    min_length: usize,
}

impl ActionIdLengthRule {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for ActionIdLengthRule {
    fn default() -> Self {
        Self::new(MIN_ACTION_ID_LENGTH)
    }
}

impl Rule for ActionIdLengthRule {
    fn name(&self) -> &'static str {
        rule::ACTION_ID_LENGTH
    }

    fn check(&self, _request: &RequestContext<'_>, action_id: &str) -> Result<(), Rejection> {
        if action_id.chars().count() < self.min_length {
            return Err(
                Rejection::new(rule::ACTION_ID_LENGTH, RejectionReason::InvalidActionId)
                    .with_evidence(field::ACTION_ID, Some(action_id)),
            );
        }
        Ok(())
    }
}

/// Rejects markers carrying shell or template metacharacters.
#[derive(Debug, Clone)]
pub struct ActionIdCharsetRule {
    forbidden: Regex,
}

impl ActionIdCharsetRule {
    pub fn new(forbidden: Regex) -> Self {
        Self { forbidden }
    }
}

impl Default for ActionIdCharsetRule {
    fn default() -> Self {
        Self::new(DEFAULT_FORBIDDEN.clone())
    }
}

impl Rule for ActionIdCharsetRule {
    fn name(&self) -> &'static str {
        rule::ACTION_ID_CHARSET
    }

    fn check(&self, _request: &RequestContext<'_>, action_id: &str) -> Result<(), Rejection> {
        if self.forbidden.is_match(action_id) {
            return Err(
                Rejection::new(rule::ACTION_ID_CHARSET, RejectionReason::InvalidRequest)
                    .with_evidence(field::ACTION_ID, Some(action_id)),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "action_id_test.rs"]
mod action_id_test;
