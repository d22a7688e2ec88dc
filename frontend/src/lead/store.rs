use async_trait::async_trait;
use gloo_console::error;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use super::validate::LeadRecord;
use crate::config::StoreConfig;

pub const LEADS_TABLE: &str = "leads";
/// Postgres `unique_violation`; a lead with this email already exists.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("store rejected insert (status {status}, code {code:?}): {message}")]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("transport failure: {0}")]
    Transport(String),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Remote { code: Some(code), .. } if code == UNIQUE_VIOLATION)
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Maps a non-2xx response into a [`StoreError::Remote`].
pub fn remote_error(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let mut message = err.message.unwrap_or_else(|| format!("HTTP {}", status));
            if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                message = format!("{} ({})", message, details);
            }
            if let Some(hint) = err.hint.filter(|h| !h.is_empty()) {
                message = format!("{}; hint: {}", message, hint);
            }
            StoreError::Remote {
                status,
                code: err.code,
                message,
            }
        }
        Err(_) => StoreError::Remote {
            status,
            code: None,
            message: if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            },
        },
    }
}

#[async_trait(?Send)]
pub trait LeadStore {
    async fn insert(&self, lead: &LeadRecord) -> Result<(), StoreError>;
}

/// Inserts leads through Supabase's REST endpoint.
pub struct SupabaseStore {
    config: StoreConfig,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl LeadStore for SupabaseStore {
    async fn insert(&self, lead: &LeadRecord) -> Result<(), StoreError> {
        let request = Request::post(&self.config.table_endpoint(LEADS_TABLE))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
            .header("Prefer", "return=representation")
            .json(&[lead])
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Lead insert failed:", e.to_string());
                return Err(StoreError::Transport(e.to_string()));
            }
        };

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(remote_error(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_duplicate() {
        let err = remote_error(
            409,
            r#"{"code":"23505","details":"Key (email)=(a@b.co) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"leads_email_key\""}"#,
        );
        assert!(err.is_duplicate());
        match err {
            StoreError::Remote { status, message, .. } => {
                assert_eq!(status, 409);
                assert!(message.contains("already exists"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn other_codes_are_not_duplicates() {
        let err = remote_error(401, r#"{"code":"42501","message":"permission denied"}"#);
        assert!(!err.is_duplicate());
        assert!(!StoreError::Transport("offline".into()).is_duplicate());
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        assert_eq!(
            remote_error(502, "Bad Gateway"),
            StoreError::Remote {
                status: 502,
                code: None,
                message: "Bad Gateway".into()
            }
        );
        assert_eq!(
            remote_error(500, ""),
            StoreError::Remote {
                status: 500,
                code: None,
                message: "HTTP 500".into()
            }
        );
    }
}
