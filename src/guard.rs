use crate::action_id::{ActionIdCharsetRule, ActionIdLengthRule};
use crate::content_type::ContentTypeRule;
use crate::context::RequestContext;
use crate::method::MethodRule;
use crate::options::{GuardOptions, ValidationError};
use crate::provenance::ProvenanceRule;
use crate::result::Verdict;
use crate::rule::{Rule, RuleSet};
use crate::sink::{RejectionSink, TracingSink};
use std::fmt;
use std::sync::Arc;

/// Stateless filter for server-action invocations, configured from
/// [`GuardOptions`].
///
/// Requests without an action marker are allowed untouched. Marked requests
/// run through the rule list in order:
///
/// 1. provenance (`origin` / `referer` against the allowed origins)
/// 2. action id length
/// 3. action id characters
/// 4. content-type
/// 5. method
///
/// The first failing rule decides the verdict.
#[derive(Clone)]
pub struct ActionGuard {
    rules: RuleSet,
    sink: Arc<dyn RejectionSink>,
}

impl ActionGuard {
    pub fn new(options: GuardOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let forbidden = options.compile_forbidden_pattern()?;
        let GuardOptions {
            app_url,
            dev_origin,
            min_action_id_length,
            allowed_content_types,
            allowed_method,
            ..
        } = options;

        let mut rules = RuleSet::new();
        rules.push(ProvenanceRule::new(app_url, dev_origin))?;
        rules.push(ActionIdLengthRule::new(min_action_id_length))?;
        rules.push(ActionIdCharsetRule::new(forbidden))?;
        rules.push(ContentTypeRule::list(allowed_content_types))?;
        rules.push(MethodRule::new(allowed_method))?;

        Ok(Self {
            rules,
            sink: Arc::new(TracingSink),
        })
    }

    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: RejectionSink + 'static,
    {
        self.sink = Arc::new(sink);
        self
    }

    /// Append a rule after the built-in ones.
    pub fn with_rule<R>(mut self, rule: R) -> Result<Self, ValidationError>
    where
        R: Rule + 'static,
    {
        self.rules.push(rule)?;
        Ok(self)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.names()
    }

    /// Decide without logging.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> Verdict {
        match request.action_id() {
            Some(action_id) => self.rules.run(request, action_id).into(),
            None => Verdict::Allow,
        }
    }

    /// Decide and report any rejection to the configured sink.
    pub fn check(&self, request: &RequestContext<'_>) -> Verdict {
        let verdict = self.evaluate(request);
        if let Verdict::Reject(rejection) = &verdict {
            self.sink.record(rejection);
        }
        verdict
    }
}

impl fmt::Debug for ActionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionGuard")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
