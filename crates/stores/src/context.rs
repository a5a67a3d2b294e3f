//! Application context: one explicitly constructed owner for the HTTP
//! client, the event bus, and every store.

use std::sync::Arc;

use rideops_client::storage::{FileStorage, KeyValueStore, MemoryStorage};
use rideops_client::{ApiClient, ClientConfig, EventBus, Session};
use rideops_core::envelope::StatusSummary;

use crate::admin::AdminStore;
use crate::auth::AuthStore;
use crate::device::DeviceStore;
use crate::driver::DriverStore;
use crate::error::StoreError;
use crate::forbidden::ForbiddenDialog;
use crate::help::HelpStore;
use crate::merchant::MerchantStore;
use crate::registration::RegistrationStore;
use crate::tariff::TariffStore;
use crate::ui::UiStore;
use crate::user::UserStore;
use crate::wallet::WalletStore;

/// Summary counters for the dashboard landing page. `None` where the
/// summary could not be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardOverview {
    pub admins: Option<StatusSummary>,
    pub drivers: Option<StatusSummary>,
    pub merchants: Option<StatusSummary>,
    pub topups: Option<StatusSummary>,
}

pub struct AppContext {
    pub config: ClientConfig,
    pub session: Arc<Session>,
    pub events: Arc<EventBus>,
    pub api: ApiClient,

    pub auth: AuthStore,
    pub ui: UiStore,
    pub forbidden: ForbiddenDialog,

    pub admins: AdminStore,
    pub drivers: DriverStore,
    pub merchants: MerchantStore,
    pub wallet: WalletStore,
    pub users: UserStore,
    pub tariffs: TariffStore,
    pub help: HelpStore,
    pub devices: DeviceStore,
    pub registration: RegistrationStore,
}

impl AppContext {
    /// Build from config. Session state is kept in
    /// `config.session_state_path` when set, in memory otherwise.
    pub fn new(config: ClientConfig) -> Result<Self, StoreError> {
        let storage: Arc<dyn KeyValueStore> = match &config.session_state_path {
            Some(path) => Arc::new(FileStorage::open(path)?),
            None => Arc::new(MemoryStorage::new()),
        };
        Self::with_storage(config, storage)
    }

    pub fn with_storage(
        config: ClientConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, StoreError> {
        let session = Arc::new(Session::new(storage, config.default_language));
        let events = Arc::new(EventBus::default());
        let api = ApiClient::new(&config, session.clone(), events.clone())?;

        tracing::info!(
            api_url = %api.base_url(),
            has_token = session.bearer_token().is_some(),
            language = session.language().as_str(),
            "Application context ready"
        );

        Ok(Self {
            auth: AuthStore::new(api.clone()),
            ui: UiStore::new(session.clone(), events.clone()),
            forbidden: ForbiddenDialog::new(session.language()),
            admins: AdminStore::new(api.clone()),
            drivers: DriverStore::new(api.clone()),
            merchants: MerchantStore::new(api.clone()),
            wallet: WalletStore::new(api.clone()),
            users: UserStore::new(api.clone()),
            tariffs: TariffStore::new(api.clone()),
            help: HelpStore::new(api.clone()),
            devices: DeviceStore::new(api.clone()),
            registration: RegistrationStore::new(api.clone()),
            config,
            session,
            events,
            api,
        })
    }

    /// Refresh the four review summaries and collect them.
    pub async fn dashboard_overview(&mut self) -> DashboardOverview {
        self.admins.refresh_summary().await;
        self.drivers.list_mut().refresh_summary().await;
        self.merchants.refresh_summary().await;
        self.wallet.refresh_summary().await;

        DashboardOverview {
            admins: self.admins.summary().copied(),
            drivers: self.drivers.list().summary().copied(),
            merchants: self.merchants.summary().copied(),
            topups: self.wallet.summary().copied(),
        }
    }
}
