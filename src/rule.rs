use crate::context::RequestContext;
use crate::options::ValidationError;
use crate::result::Rejection;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// One named check in the guard's ordered rule list.
///
/// Rules only run once the request has been identified as an action
/// invocation; `action_id` is the resolved marker value.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, request: &RequestContext<'_>, action_id: &str) -> Result<(), Rejection>;
}

/// Rules keyed by name, evaluated in insertion order.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<&'static str, Arc<dyn Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<R>(&mut self, rule: R) -> Result<(), ValidationError>
    where
        R: Rule + 'static,
    {
        let name = rule.name();
        if self.rules.contains_key(name) {
            return Err(ValidationError::DuplicateRule(name));
        }
        self.rules.insert(name, Arc::new(rule));
        Ok(())
    }

    /// Run every rule in order, stopping at the first rejection.
    pub fn run(&self, request: &RequestContext<'_>, action_id: &str) -> Result<(), Rejection> {
        self.rules
            .values()
            .try_for_each(|rule| rule.check(request, action_id))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
