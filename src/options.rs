use crate::constants::{DEV_ORIGIN, FORBIDDEN_ACTION_ID_PATTERN, MIN_ACTION_ID_LENGTH};
use crate::constants::{content_type, env, method};
use crate::util::is_http_token;
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;
use url::Url;

/// Errors raised when [`GuardOptions`] cannot produce a working guard.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("app url `{value}` must be an absolute http(s) url")]
    InvalidAppUrl { value: String },
    #[error("development origin must not be empty")]
    EmptyDevOrigin,
    #[error("minimum action id length must be at least 1")]
    ZeroActionIdLength,
    #[error("forbidden action id pattern `{pattern}` failed to compile")]
    InvalidForbiddenPattern {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("allowed content types must contain at least one entry")]
    EmptyContentTypes,
    #[error("allowed content types must not contain blank entries")]
    BlankContentType,
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("a rule named `{0}` is already registered")]
    DuplicateRule(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOptions {
    /// Canonical application URL. Joins the request's own host in the
    /// allowed-origin set and replaces the development fallback.
    pub app_url: Option<String>,
    /// Allowed when no `app_url` is configured.
    pub dev_origin: String,
    pub min_action_id_length: usize,
    /// Regex matched against the action marker; any hit rejects the request.
    pub forbidden_pattern: String,
    pub allowed_content_types: Vec<String>,
    pub allowed_method: String,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            app_url: None,
            dev_origin: DEV_ORIGIN.into(),
            min_action_id_length: MIN_ACTION_ID_LENGTH,
            forbidden_pattern: FORBIDDEN_ACTION_ID_PATTERN.into(),
            allowed_content_types: vec![
                content_type::MULTIPART_FORM_DATA.into(),
                content_type::TEXT_PLAIN.into(),
                content_type::FORM_URLENCODED.into(),
            ],
            allowed_method: method::POST.into(),
        }
    }
}

impl GuardOptions {
    /// Defaults plus the app url from `NEXT_PUBLIC_APP_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app_url: lookup(env::APP_URL).filter(|value| !value.is_empty()),
            ..Self::default()
        }
    }

    pub fn app_url<S: Into<String>>(mut self, value: S) -> Self {
        self.app_url = Some(value.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(app_url) = &self.app_url {
            validate_app_url(app_url)?;
        }

        if self.dev_origin.trim().is_empty() {
            return Err(ValidationError::EmptyDevOrigin);
        }

        if self.min_action_id_length == 0 {
            return Err(ValidationError::ZeroActionIdLength);
        }

        self.compile_forbidden_pattern()?;

        if self.allowed_content_types.is_empty() {
            return Err(ValidationError::EmptyContentTypes);
        }
        if self
            .allowed_content_types
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(ValidationError::BlankContentType);
        }

        if !is_http_token(&self.allowed_method) {
            return Err(ValidationError::InvalidMethod(self.allowed_method.clone()));
        }

        Ok(())
    }

    pub(crate) fn compile_forbidden_pattern(&self) -> Result<Regex, ValidationError> {
        Regex::new(&self.forbidden_pattern).map_err(|err| {
            ValidationError::InvalidForbiddenPattern {
                pattern: self.forbidden_pattern.clone(),
                source: Box::new(err),
            }
        })
    }
}

fn validate_app_url(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidAppUrl {
        value: value.to_owned(),
    };

    let parsed = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
