use crate::constants::env;
use serde::Serialize;
use serde_json::Value;
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdminAuthError {
    #[error("admin password is not configured")]
    MissingPassword,
}

/// Password check behind the admin login endpoint.
#[derive(Clone)]
pub struct AdminAuth {
    password: String,
}

impl AdminAuth {
    pub fn new<S: Into<String>>(password: S) -> Result<Self, AdminAuthError> {
        let password = password.into();
        if password.is_empty() {
            return Err(AdminAuthError::MissingPassword);
        }
        Ok(Self { password })
    }

    /// Reads `ADMIN_PASSWORD`.
    pub fn from_env() -> Result<Self, AdminAuthError> {
        let password = std::env::var(env::ADMIN_PASSWORD).unwrap_or_default();
        Self::new(password)
    }

    /// Check a JSON login body of the form `{"password": "..."}`.
    pub fn authenticate(&self, body: &[u8]) -> AuthOutcome {
        let payload: Value = match serde_json::from_slice(body) {
            Ok(Value::Null) | Err(_) => return AuthOutcome::Failed,
            Ok(payload) => payload,
        };

        let provided = payload.get("password").and_then(Value::as_str);
        match provided {
            Some(provided) if self.matches(provided) => AuthOutcome::Granted,
            _ => AuthOutcome::Denied,
        }
    }

    fn matches(&self, provided: &str) -> bool {
        self.password.as_bytes().ct_eq(provided.as_bytes()).into()
    }
}

impl std::fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuth").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Denied,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthBody {
    Success { success: bool },
    Error { error: &'static str },
}

impl AuthOutcome {
    pub fn status(&self) -> u16 {
        match self {
            AuthOutcome::Granted => 200,
            AuthOutcome::Denied => 401,
            AuthOutcome::Failed => 500,
        }
    }

    pub fn body(&self) -> AuthBody {
        match self {
            AuthOutcome::Granted => AuthBody::Success { success: true },
            AuthOutcome::Denied => AuthBody::Error {
                error: "Invalid password",
            },
            AuthOutcome::Failed => AuthBody::Error {
                error: "Authentication failed",
            },
        }
    }
}

#[cfg(test)]
#[path = "admin_auth_test.rs"]
mod admin_auth_test;
