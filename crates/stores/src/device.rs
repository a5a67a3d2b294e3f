//! Active login sessions of the signed-in account.

use rideops_client::services::device;
use rideops_client::{ApiClient, AppEvent};
use rideops_core::jwt::token_jti;
use rideops_core::models::device::Device;

use crate::error::StoreError;

const STORE_NAME: &str = "devices";

pub struct DeviceStore {
    api: ApiClient,
    devices: Vec<Device>,
    is_loading: bool,
    error: Option<String>,
    current_jti: Option<String>,
}

impl DeviceStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            devices: Vec::new(),
            is_loading: false,
            error: None,
            current_jti: None,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `jti` of the token this client is using, if it could be read.
    pub fn current_jti(&self) -> Option<&str> {
        self.current_jti.as_deref()
    }

    fn decode_token(&mut self) {
        self.current_jti = self
            .api
            .session()
            .bearer_token()
            .and_then(|token| token_jti(&token));
    }

    /// Load the device list, flagging the one that matches our token.
    /// On failure the list is emptied.
    pub async fn load_devices(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.decode_token();

        match device::list(&self.api).await {
            Ok(response) => {
                let current = self.current_jti.as_deref();
                self.devices = response
                    .data
                    .into_iter()
                    .map(|mut d| {
                        d.is_current = current == Some(d.jti.as_str());
                        d
                    })
                    .collect();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load devices");
                self.error = Some(e.user_message("Failed to load devices"));
                self.devices.clear();
            }
        }

        self.is_loading = false;
        self.notify();
    }

    /// Revoke a session, then reload the list.
    pub async fn revoke_device(&mut self, jti: &str) -> Result<(), StoreError> {
        if let Err(e) = device::revoke(&self.api, jti).await {
            tracing::warn!(jti, error = %e, "Failed to revoke device");
            return Err(e.into());
        }
        tracing::info!(jti, "Device revoked");
        self.load_devices().await;
        Ok(())
    }

    /// Send this client's push token to the backend and remember it.
    pub async fn register_fcm_token(&mut self, fcm_token: &str) -> Result<(), StoreError> {
        device::update_fcm_token(&self.api, fcm_token).await?;
        self.api.session().set_fcm_token(fcm_token);
        tracing::info!("Push token registered");
        Ok(())
    }

    fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: STORE_NAME });
    }
}
