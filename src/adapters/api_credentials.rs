use crate::core::models::SearchError;
use crate::global_constants;
use crate::user_settings::UserSettings;

/// The two header values the search API authenticates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Where credential values come from, in resolution order: the settings file
/// first, the process environment second. Captured once at startup so the
/// provider can re-resolve at every call without re-reading the settings file.
#[derive(Debug, Clone, Default)]
pub struct CredentialSource {
    stored_client_id: Option<String>,
    stored_client_secret: Option<String>,
}

impl CredentialSource {
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            stored_client_id: settings.client_id.clone(),
            stored_client_secret: settings.client_secret.clone(),
        }
    }

    /// Ordered-fallback resolution: first non-empty value wins. Fails only
    /// when neither source yields both values.
    pub fn resolve(&self) -> Result<ApiCredentials, SearchError> {
        let client_id = first_non_empty(
            self.stored_client_id.as_deref(),
            std::env::var(global_constants::CLIENT_ID_ENV_VAR).ok().as_deref(),
        );
        let client_secret = first_non_empty(
            self.stored_client_secret.as_deref(),
            std::env::var(global_constants::CLIENT_SECRET_ENV_VAR).ok().as_deref(),
        );

        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(ApiCredentials {
                client_id,
                client_secret,
            }),
            _ => {
                log::error!("[CREDENTIALS] No usable client id/secret in settings or environment");
                Err(SearchError::MissingCredentials)
            }
        }
    }
}

fn first_non_empty(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
