use crate::error::{AppError, Result};
use crate::sheets::client::AUTH_SCOPE;
use hyper_util::client::legacy::connect::HttpConnector;
use std::path::Path;
use tracing::instrument;
use yup_oauth2::{
    ServiceAccountAuthenticator, authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Build a service-account authenticator and verify it by fetching a token
#[instrument(name = "Loading service account credentials", skip_all)]
pub(super) async fn create_and_verify_authenticator(key_path: &Path) -> Result<AuthType> {
    let key = yup_oauth2::read_service_account_key(key_path)
        .await
        .map_err(|e| {
            AppError::Auth(format!(
                "Failed to read service account key {:?}: {}",
                key_path, e
            ))
        })?;

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    // Trigger authentication by requesting a token
    let _token = auth
        .token(&[AUTH_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    Ok(auth)
}
