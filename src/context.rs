use crate::constants::header;
use crate::util::{equals_ignore_case, non_empty};

/// Borrowed view of the request attributes the guard inspects.
///
/// Header values are compared as literal strings; only header *names* are
/// case-insensitive, which [`RequestContext::from_headers`] takes care of.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub host: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub next_action: Option<&'a str>,
    pub rsc_action_id: Option<&'a str>,
    pub content_type: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Build a context from raw `(name, value)` header pairs. The first
    /// occurrence of each header wins.
    pub fn from_headers<I>(method: &'a str, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ctx = RequestContext {
            method,
            ..RequestContext::default()
        };

        for (name, value) in headers {
            let slot = if equals_ignore_case(name, header::HOST) {
                &mut ctx.host
            } else if equals_ignore_case(name, header::ORIGIN) {
                &mut ctx.origin
            } else if equals_ignore_case(name, header::REFERER) {
                &mut ctx.referer
            } else if equals_ignore_case(name, header::NEXT_ACTION) {
                &mut ctx.next_action
            } else if equals_ignore_case(name, header::RSC_ACTION_ID) {
                &mut ctx.rsc_action_id
            } else if equals_ignore_case(name, header::CONTENT_TYPE) {
                &mut ctx.content_type
            } else {
                continue;
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        ctx
    }

    /// The action marker: `next-action` when non-empty, otherwise
    /// `rsc-action-id` when non-empty.
    pub fn action_id(&self) -> Option<&'a str> {
        non_empty(self.next_action).or_else(|| non_empty(self.rsc_action_id))
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
