pub mod admin_auth;
pub mod constants;
pub mod metadata;

mod action_id;
mod content_type;
mod context;
mod guard;
mod method;
mod options;
mod provenance;
mod result;
mod rule;
mod sink;
mod util;

pub use action_id::{ActionIdCharsetRule, ActionIdLengthRule};
pub use content_type::ContentTypeRule;
pub use context::RequestContext;
pub use guard::ActionGuard;
pub use method::MethodRule;
pub use options::{GuardOptions, ValidationError};
pub use provenance::{AllowedOrigins, ProvenanceRule};
pub use result::{ErrorBody, Evidence, Rejection, RejectionReason, Verdict};
pub use rule::{Rule, RuleSet};
pub use sink::{NoopSink, RejectionSink, TracingSink};
