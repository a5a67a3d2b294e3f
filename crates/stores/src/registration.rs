//! Merchant registration wizard store.
//!
//! Drives the six registration steps against the backend. Each step is
//! validated locally, sent, merged into [`RegistrationData`], and only then
//! advances `current_step`. A failed step leaves the step where it was and
//! records a message in `error`.

use validator::Validate;

use rideops_client::services::merchant;
use rideops_client::{ApiClient, AppEvent};
use rideops_core::error::CoreError;
use rideops_core::models::merchant::{RegisterRequest, WaitingProfile};
use rideops_core::registration::{
    require_merchant_uuid, submit_onboarding_request, validate_menu_items,
    BankAccountInput, DocumentsInput, MenuItemInput, ProfileInput, RegistrationData,
    RegistrationStatus, ResumeAction, WizardStep,
};
use rideops_core::types::Uuid;

use crate::error::StoreError;

const STORE_NAME: &str = "merchant_registration";

pub struct RegistrationStore {
    api: ApiClient,
    current_step: WizardStep,
    data: RegistrationData,
    merchant_uuid: Option<Uuid>,
    status: Option<RegistrationStatus>,
    is_submitted: bool,
    is_loading: bool,
    error: Option<String>,
    show_pending_dialog: bool,
    show_submitted_dialog: bool,
}

impl RegistrationStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            current_step: WizardStep::default(),
            data: RegistrationData::default(),
            merchant_uuid: None,
            status: None,
            is_submitted: false,
            is_loading: false,
            error: None,
            show_pending_dialog: false,
            show_submitted_dialog: false,
        }
    }

    // ---- state ----

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn merchant_uuid(&self) -> Option<&str> {
        self.merchant_uuid.as_deref()
    }

    pub fn status(&self) -> Option<RegistrationStatus> {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// "Continue your registration?" prompt, also used for decided
    /// registrations.
    pub fn show_pending_dialog(&self) -> bool {
        self.show_pending_dialog
    }

    /// "Already submitted" prompt.
    pub fn show_submitted_dialog(&self) -> bool {
        self.show_submitted_dialog
    }

    // ---- resumption ----

    /// Look for an unfinished registration belonging to the session.
    ///
    /// When one exists its fields are merged into `data`, the uuid is
    /// adopted, and its status decides the step and prompt. A 4xx here is
    /// the normal "nothing to resume" answer and is returned to the caller
    /// without touching `error`.
    pub async fn check_waiting_profile(&mut self) -> Result<Option<WaitingProfile>, StoreError> {
        let Some(profile) = self.fetch_waiting_profile().await? else {
            return Ok(None);
        };

        match self.status.map(RegistrationStatus::resume_action) {
            Some(ResumeAction::Continue(step)) => {
                tracing::info!(
                    status = ?self.status,
                    resume_step = step.to_number(),
                    "Found pending registration"
                );
                self.current_step = step;
                self.show_pending_dialog = true;
            }
            Some(ResumeAction::AlreadySubmitted) => {
                tracing::info!("Registration already submitted");
                self.show_submitted_dialog = true;
            }
            Some(ResumeAction::AlreadyDecided(status)) => {
                tracing::info!(status = status.as_str(), "Registration already decided");
                self.show_pending_dialog = true;
            }
            None => {}
        }

        self.notify();
        Ok(Some(profile))
    }

    /// Refresh `data` from the waiting profile without moving the wizard.
    pub async fn load_step_data(
        &mut self,
        target: WizardStep,
    ) -> Result<Option<WaitingProfile>, StoreError> {
        let profile = self.fetch_waiting_profile().await?;
        if profile.is_some() {
            tracing::debug!(step = target.to_number(), "Loaded step data");
            self.notify();
        }
        Ok(profile)
    }

    async fn fetch_waiting_profile(&mut self) -> Result<Option<WaitingProfile>, StoreError> {
        self.is_loading = true;
        self.error = None;
        let result = merchant::waiting_profile(&self.api).await;
        self.is_loading = false;

        let profile = match result {
            Ok(response) => response.data,
            Err(e) => {
                tracing::debug!(error = %e, "No waiting registration");
                return Err(e.into());
            }
        };
        let Some(uuid) = profile.uuid.clone() else {
            return Ok(None);
        };

        self.merchant_uuid = Some(uuid);
        self.data.apply_waiting_profile(&profile);
        self.status = match profile.status.as_deref().map(RegistrationStatus::parse) {
            Some(Ok(status)) => Some(status),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring unknown registration status");
                None
            }
            None => None,
        };
        Ok(Some(profile))
    }

    /// Close the pending prompt and stay on the resumed step.
    pub fn continue_pending(&mut self) {
        tracing::info!(step = self.current_step.to_number(), "Continuing registration");
        self.show_pending_dialog = false;
    }

    pub fn cancel_pending(&mut self) {
        self.show_pending_dialog = false;
    }

    pub fn close_submitted(&mut self) {
        self.show_submitted_dialog = false;
    }

    // ---- steps ----

    /// Step 1: create the merchant. Returns the issued uuid.
    pub async fn submit_step1(&mut self, input: RegisterRequest) -> Result<Uuid, StoreError> {
        self.begin();
        let result = self.send_register(&input).await;
        self.finish(WizardStep::Register, result)
    }

    async fn send_register(&mut self, input: &RegisterRequest) -> Result<Uuid, StoreError> {
        input.validate()?;
        let response = merchant::register(&self.api, input).await?;
        self.data.apply_register(input);

        let uuid = response.data.uuid.filter(|u| !u.is_empty()).ok_or_else(|| {
            CoreError::Internal("merchant_uuid missing from register response".to_string())
        })?;
        tracing::info!(merchant_uuid = %uuid, "Merchant registered");
        self.merchant_uuid = Some(uuid.clone());
        Ok(uuid)
    }

    /// Step 2: store profile. Unset coordinates are sent as `0`.
    pub async fn submit_step2(&mut self, input: ProfileInput) -> Result<(), StoreError> {
        self.begin();
        let result = self.send_profile(&input).await;
        self.finish(WizardStep::Profile, result)
    }

    async fn send_profile(&mut self, input: &ProfileInput) -> Result<(), StoreError> {
        input.validate()?;
        let uuid = require_merchant_uuid(self.merchant_uuid.as_deref(), WizardStep::Profile)?;
        let request = input.to_request(&uuid);
        tracing::debug!(
            latitude = request.coordinate.latitude,
            longitude = request.coordinate.longitude,
            "Submitting store profile"
        );
        merchant::update_profile(&self.api, &request).await?;
        self.data.apply_profile(input);
        Ok(())
    }

    /// Step 3: identity and store documents.
    pub async fn submit_step3(&mut self, input: DocumentsInput) -> Result<(), StoreError> {
        self.begin();
        let result = self.send_documents(&input).await;
        self.finish(WizardStep::Documents, result)
    }

    async fn send_documents(&mut self, input: &DocumentsInput) -> Result<(), StoreError> {
        input.validate()?;
        let uuid = require_merchant_uuid(self.merchant_uuid.as_deref(), WizardStep::Documents)?;
        merchant::update_documents(&self.api, &input.to_request(&uuid)).await?;
        self.data.apply_documents(input);
        Ok(())
    }

    /// Step 4: payout bank account.
    pub async fn submit_step4(&mut self, input: BankAccountInput) -> Result<(), StoreError> {
        self.begin();
        let result = self.send_bank_account(&input).await;
        self.finish(WizardStep::BankAccount, result)
    }

    async fn send_bank_account(&mut self, input: &BankAccountInput) -> Result<(), StoreError> {
        input.validate()?;
        let uuid = require_merchant_uuid(self.merchant_uuid.as_deref(), WizardStep::BankAccount)?;
        merchant::update_bank_account(&self.api, &input.to_request(&uuid)).await?;
        self.data.apply_bank_account(input);
        Ok(())
    }

    /// Step 5: menu items, posted one at a time in order. The first failure
    /// stops the loop; items already posted stay on the backend.
    pub async fn submit_step5(&mut self, items: Vec<MenuItemInput>) -> Result<(), StoreError> {
        self.begin();
        let result = self.send_menu_items(items).await;
        self.finish(WizardStep::MenuItems, result)
    }

    async fn send_menu_items(&mut self, items: Vec<MenuItemInput>) -> Result<(), StoreError> {
        validate_menu_items(&items)?;
        let uuid = require_merchant_uuid(self.merchant_uuid.as_deref(), WizardStep::MenuItems)?;
        for item in &items {
            merchant::add_menu_item(&self.api, &item.to_request(&uuid)).await?;
        }
        tracing::info!(merchant_uuid = %uuid, count = items.len(), "Menu items added");
        self.data.menu_items = items;
        Ok(())
    }

    /// Step 6: submit for review, stamped with today's date.
    pub async fn submit_step6(&mut self, declaration_agreement: bool) -> Result<(), StoreError> {
        self.begin();
        let result = self.send_submission(declaration_agreement).await;
        self.finish(WizardStep::Submit, result)
    }

    async fn send_submission(&mut self, declaration_agreement: bool) -> Result<(), StoreError> {
        let uuid = require_merchant_uuid(self.merchant_uuid.as_deref(), WizardStep::Submit)?;
        let request = submit_onboarding_request(&uuid, declaration_agreement);
        merchant::submit_onboarding(&self.api, &request).await?;
        tracing::info!(merchant_uuid = %uuid, submit_date = %request.submit_date, "Onboarding submitted");
        self.data.declaration_agreement = declaration_agreement;
        self.data.submit_date = request.submit_date;
        Ok(())
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Settle a step: advance on success, record the message on failure.
    fn finish<T>(&mut self, step: WizardStep, result: Result<T, StoreError>) -> Result<T, StoreError> {
        self.is_loading = false;
        match result {
            Ok(value) => {
                match step.next() {
                    Some(next) => self.current_step = next,
                    None => self.is_submitted = true,
                }
                self.notify();
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(step = step.to_number(), error = %e, "Registration step failed");
                self.error = Some(e.user_message(step.failure_message()));
                Err(e)
            }
        }
    }

    // ---- navigation ----

    pub fn next_step(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    pub fn prev_step(&mut self) {
        if let Some(prev) = self.current_step.prev() {
            self.current_step = prev;
        }
    }

    /// Jump to step `n` (1-based). Out-of-range numbers are ignored.
    pub fn go_to_step(&mut self, n: u8) {
        if let Ok(step) = WizardStep::from_number(n) {
            self.current_step = step;
        }
    }

    /// Back to an empty registration.
    pub fn reset(&mut self) {
        self.current_step = WizardStep::default();
        self.data = RegistrationData::default();
        self.merchant_uuid = None;
        self.status = None;
        self.is_submitted = false;
        self.is_loading = false;
        self.error = None;
        self.show_pending_dialog = false;
        self.show_submitted_dialog = false;
        self.notify();
    }

    fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: STORE_NAME });
    }
}
