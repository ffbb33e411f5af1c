#![allow(dead_code)]

use action_guard_rs::constants::method;
use action_guard_rs::{ActionGuard, GuardOptions, RejectionSink, RequestContext, Verdict};

pub const HASH_ID: &str = "7f3a9c0e21b84d56a0c3e9f1b2d4a6c8e0f1a2b3";

#[derive(Default)]
pub struct GuardBuilder {
    app_url: Option<String>,
    min_action_id_length: Option<usize>,
    allowed_content_types: Option<Vec<String>>,
    sink: Option<Box<dyn FnOnce(ActionGuard) -> ActionGuard>>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_url(mut self, value: impl Into<String>) -> Self {
        self.app_url = Some(value.into());
        self
    }

    pub fn min_action_id_length(mut self, value: usize) -> Self {
        self.min_action_id_length = Some(value);
        self
    }

    pub fn allowed_content_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_content_types = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn sink<S>(mut self, sink: S) -> Self
    where
        S: RejectionSink + 'static,
    {
        self.sink = Some(Box::new(move |guard: ActionGuard| guard.with_sink(sink)));
        self
    }

    pub fn build(self) -> ActionGuard {
        let GuardOptions {
            app_url: default_app_url,
            min_action_id_length: default_min_length,
            allowed_content_types: default_content_types,
            ..
        } = GuardOptions::default();

        let options = GuardOptions {
            app_url: self.app_url.or(default_app_url),
            min_action_id_length: self.min_action_id_length.unwrap_or(default_min_length),
            allowed_content_types: self
                .allowed_content_types
                .unwrap_or(default_content_types),
            ..GuardOptions::default()
        };

        let guard = ActionGuard::new(options).expect("valid guard configuration");
        match self.sink {
            Some(apply) => apply(guard),
            None => guard,
        }
    }
}

#[derive(Clone)]
pub struct ActionRequestBuilder {
    method: String,
    host: Option<String>,
    origin: Option<String>,
    referer: Option<String>,
    next_action: Option<String>,
    rsc_action_id: Option<String>,
    content_type: Option<String>,
}

impl ActionRequestBuilder {
    /// A bare request with no headers at all.
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            host: None,
            origin: None,
            referer: None,
            next_action: None,
            rsc_action_id: None,
            content_type: None,
        }
    }

    /// A same-origin form post invoking an action on `example.com`.
    pub fn valid() -> Self {
        Self::new()
            .host("example.com")
            .origin("https://example.com")
            .next_action(HASH_ID)
            .content_type("application/x-www-form-urlencoded")
    }

    pub fn method(mut self, value: impl Into<String>) -> Self {
        self.method = value.into();
        self
    }

    pub fn host(mut self, value: impl Into<String>) -> Self {
        self.host = Some(value.into());
        self
    }

    pub fn origin(mut self, value: impl Into<String>) -> Self {
        self.origin = Some(value.into());
        self
    }

    pub fn without_origin(mut self) -> Self {
        self.origin = None;
        self
    }

    pub fn referer(mut self, value: impl Into<String>) -> Self {
        self.referer = Some(value.into());
        self
    }

    pub fn next_action(mut self, value: impl Into<String>) -> Self {
        self.next_action = Some(value.into());
        self
    }

    pub fn rsc_action_id(mut self, value: impl Into<String>) -> Self {
        self.rsc_action_id = Some(value.into());
        self
    }

    pub fn without_action(mut self) -> Self {
        self.next_action = None;
        self.rsc_action_id = None;
        self
    }

    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
            next_action: self.next_action.as_deref(),
            rsc_action_id: self.rsc_action_id.as_deref(),
            content_type: self.content_type.as_deref(),
        }
    }

    pub fn check(&self, guard: &ActionGuard) -> Verdict {
        guard.check(&self.context())
    }

    pub fn evaluate(&self, guard: &ActionGuard) -> Verdict {
        guard.evaluate(&self.context())
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn request() -> ActionRequestBuilder {
    ActionRequestBuilder::new()
}

pub fn valid_request() -> ActionRequestBuilder {
    ActionRequestBuilder::valid()
}
