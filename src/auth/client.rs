//! Auth sub-client: sign-in bookkeeping and logout.

use crate::auth::AuthToken;
use crate::client::DashboardClient;
use crate::error::{FetchError, StorageError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Auth<'a> {
    /// Store the token obtained by the (external) login form.
    pub fn sign_in(&self, token: AuthToken) -> Result<(), StorageError> {
        self.client.credentials.set_token(token)
    }

    /// Logout: `POST {auth}/auth/logout`, then clear the stored credential.
    ///
    /// Any 2xx counts as success; the reply body is ignored. The local
    /// credential is cleared whatever the backend answers, and the backend's
    /// failure is still returned. Without a stored token there is
    /// nothing to revoke and no request is made.
    pub async fn logout(&self) -> Result<(), FetchError> {
        let Some(token) = self.client.credentials.token() else {
            self.clear_local();
            return Ok(());
        };

        let url = format!("{}/auth/logout", self.client.http.auth_url());
        let result = self
            .client
            .http
            .post_text::<()>(&url, None, Some(&token))
            .await;

        self.clear_local();

        match result {
            Ok(_) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logout request failed; local credential cleared");
                Err(e)
            }
        }
    }

    /// Whether a credential is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.credentials.is_authenticated()
    }

    fn clear_local(&self) {
        if let Err(e) = self.client.credentials.clear() {
            tracing::warn!(error = %e, "Failed to clear stored credential");
        }
    }
}
