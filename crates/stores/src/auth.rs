//! Signed-in user and access token.

use validator::Validate;

use rideops_client::services::{auth, user};
use rideops_client::{ApiClient, AppEvent};
use rideops_core::models::account::{GoogleLoginRequest, LoginRequest, RegisterAccountRequest};
use rideops_core::models::user::User;

use crate::error::StoreError;

const STORE_NAME: &str = "auth";

/// The token lives in the [`Session`](rideops_client::Session) so every
/// request picks it up; this store only mirrors it alongside the user.
pub struct AuthStore {
    api: ApiClient,
    user: Option<User>,
    is_loading: bool,
    error: Option<String>,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.api.session().token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.session().bearer_token().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        self.notify();
    }

    /// Store or clear the token. `None` removes it from storage.
    pub fn set_token(&mut self, token: Option<&str>) {
        match token {
            Some(t) => self.api.session().set_token(t),
            None => self.api.session().clear_token(),
        }
        self.notify();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    // ---- flows ----

    pub async fn login(&mut self, credentials: LoginRequest) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;
        let result = self.send_login(&credentials).await;
        self.is_loading = false;
        if let Err(e) = &result {
            tracing::warn!(username = %credentials.username, error = %e, "Login failed");
            self.error = Some(e.user_message("Login failed"));
        }
        result
    }

    async fn send_login(&mut self, credentials: &LoginRequest) -> Result<(), StoreError> {
        credentials.validate()?;
        let response = auth::login(&self.api, credentials).await?;
        self.api.session().set_token(&response.data.access_token);
        tracing::info!(username = %credentials.username, "Signed in");
        self.load_user().await
    }

    pub async fn login_with_google(&mut self, request: GoogleLoginRequest) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;
        let result = match auth::login_with_google(&self.api, &request).await {
            Ok(response) => {
                self.api.session().set_token(&response.data.access_token);
                self.load_user().await
            }
            Err(e) => Err(e.into()),
        };
        self.is_loading = false;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Google login failed");
            self.error = Some(e.user_message("Login failed"));
        }
        result
    }

    pub async fn register(&mut self, request: RegisterAccountRequest) -> Result<(), StoreError> {
        request.validate()?;
        auth::register(&self.api, &request).await?;
        tracing::info!(username = %request.username, "Account registered");
        Ok(())
    }

    /// Fetch the signed-in user into [`user`](Self::user).
    pub async fn load_user(&mut self) -> Result<(), StoreError> {
        let response = user::me(&self.api).await?;
        self.user = Some(response.data);
        self.notify();
        Ok(())
    }

    /// Sign out. The backend call is best-effort; local state is always
    /// cleared.
    pub async fn logout(&mut self) {
        if self.is_authenticated() {
            if let Err(e) = auth::logout(&self.api).await {
                tracing::warn!(error = %e, "Logout request failed");
            }
        }
        self.user = None;
        self.api.session().clear_token();
        self.notify();
    }

    /// Drop the user once the HTTP layer reports an expired session.
    pub fn handle_event(&mut self, event: &AppEvent) {
        if *event == AppEvent::SessionExpired && self.user.is_some() {
            self.user = None;
            self.notify();
        }
    }

    fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: STORE_NAME });
    }
}
