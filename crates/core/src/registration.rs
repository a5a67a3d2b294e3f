//! Merchant registration wizard rules.
//!
//! Step definitions, server-reported registration statuses, the mapping
//! from a status to the step a returning merchant resumes at, and the
//! accumulated form data carried across all six steps. The store in
//! `rideops-stores` drives the network side; everything here is pure.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::models::merchant::{
    BankAccountRequest, Coordinate, DocumentsRequest, MenuItemRequest, OperationHourItem,
    ProfileRequest, RegisterRequest, SubmitOnboardingRequest, WaitingProfile,
};
use crate::types::{DbId, Uuid};

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The six steps of merchant registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Register,
    Profile,
    Documents,
    BankAccount,
    MenuItems,
    Submit,
}

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Register),
            2 => Ok(Self::Profile),
            3 => Ok(Self::Documents),
            4 => Ok(Self::BankAccount),
            5 => Ok(Self::MenuItems),
            6 => Ok(Self::Submit),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Register => 1,
            Self::Profile => 2,
            Self::Documents => 3,
            Self::BankAccount => 4,
            Self::MenuItems => 5,
            Self::Submit => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "Registration",
            Self::Profile => "Store Profile",
            Self::Documents => "Documents",
            Self::BankAccount => "Bank Account",
            Self::MenuItems => "Menu Items",
            Self::Submit => "Submission",
        }
    }

    /// Message shown when this step's submission fails without a backend
    /// message.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Register => "Registration failed",
            Self::Profile => "Profile update failed",
            Self::Documents => "Documents update failed",
            Self::BankAccount => "Bank account update failed",
            Self::MenuItems => "Menu items update failed",
            Self::Submit => "Submission failed",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.to_number() + 1).ok()
    }

    /// The preceding step, or `None` on the first one.
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.to_number().saturating_sub(1)).ok()
    }
}

// ---------------------------------------------------------------------------
// Registration status
// ---------------------------------------------------------------------------

/// Server-reported progress of a registration.
///
/// `stepN` means step N was the last one completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Step1,
    Step2,
    Step3,
    Step4,
    Step5,
    Submitted,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    /// Parse the backend's status string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "step1" => Ok(Self::Step1),
            "step2" => Ok(Self::Step2),
            "step3" => Ok(Self::Step3),
            "step4" => Ok(Self::Step4),
            "step5" => Ok(Self::Step5),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid registration status '{s}'"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step1 => "step1",
            Self::Step2 => "step2",
            Self::Step3 => "step3",
            Self::Step4 => "step4",
            Self::Step5 => "step5",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// What the wizard does when it finds a registration in this status.
    pub fn resume_action(self) -> ResumeAction {
        match self {
            Self::Step1 => ResumeAction::Continue(WizardStep::Profile),
            Self::Step2 => ResumeAction::Continue(WizardStep::Documents),
            Self::Step3 => ResumeAction::Continue(WizardStep::BankAccount),
            Self::Step4 => ResumeAction::Continue(WizardStep::MenuItems),
            Self::Step5 => ResumeAction::Continue(WizardStep::Submit),
            Self::Submitted => ResumeAction::AlreadySubmitted,
            Self::Approved | Self::Rejected => ResumeAction::AlreadyDecided(self),
        }
    }
}

/// Outcome of mapping a waiting registration's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    /// Jump to this step after the user confirms the "continue" prompt.
    Continue(WizardStep),
    /// Onboarding was already submitted; show the terminal prompt.
    AlreadySubmitted,
    /// An admin already approved or rejected the merchant.
    AlreadyDecided(RegistrationStatus),
}

impl ResumeAction {
    /// Target step, if this action moves the wizard.
    pub fn target_step(self) -> Option<WizardStep> {
        match self {
            Self::Continue(step) => Some(step),
            Self::AlreadySubmitted | Self::AlreadyDecided(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Missing coordinates are sent as `0`; the backend rejects nulls.
pub fn coerce_coordinate(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Today's date as `YYYY-MM-DD` (UTC), the format step 6 expects.
pub fn submit_date_today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Step inputs
// ---------------------------------------------------------------------------

/// Step 2 form values. Coordinates may be unset.
#[derive(Debug, Clone, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 1))]
    pub merchant_name: String,
    pub category_id: DbId,
    #[validate(length(min = 1))]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[validate(length(min = 1))]
    pub contact_phone: String,
    pub operation_hours: Vec<OperationHourItem>,
}

impl ProfileInput {
    pub fn to_request(&self, merchant_uuid: &str) -> ProfileRequest {
        ProfileRequest {
            merchant_uuid: merchant_uuid.to_string(),
            merchant_name: self.merchant_name.clone(),
            category_id: self.category_id,
            address: self.address.clone(),
            coordinate: Coordinate {
                latitude: coerce_coordinate(self.latitude),
                longitude: coerce_coordinate(self.longitude),
            },
            contact_phone: self.contact_phone.clone(),
            operation_hours: self.operation_hours.clone(),
        }
    }
}

/// Step 3 form values; image fields hold uploaded file URLs.
#[derive(Debug, Clone, Validate)]
pub struct DocumentsInput {
    #[validate(length(min = 1))]
    pub id_card_number: String,
    #[validate(length(min = 1))]
    pub id_card_image: String,
    #[validate(length(min = 1))]
    pub selfie_image: String,
    #[validate(length(min = 1))]
    pub store_front_image: String,
    #[validate(length(min = 1))]
    pub store_inside_image: String,
}

impl DocumentsInput {
    pub fn to_request(&self, merchant_uuid: &str) -> DocumentsRequest {
        DocumentsRequest {
            merchant_uuid: merchant_uuid.to_string(),
            id_card_number: self.id_card_number.clone(),
            id_card_image: self.id_card_image.clone(),
            selfie_image: self.selfie_image.clone(),
            store_front_image: self.store_front_image.clone(),
            store_inside_image: self.store_inside_image.clone(),
        }
    }
}

/// Step 4 form values.
#[derive(Debug, Clone, Validate)]
pub struct BankAccountInput {
    #[validate(length(min = 1))]
    pub bank_code: String,
    #[validate(length(min = 1))]
    pub account_number: String,
    #[validate(length(min = 1))]
    pub account_holder_name: String,
}

impl BankAccountInput {
    pub fn to_request(&self, merchant_uuid: &str) -> BankAccountRequest {
        BankAccountRequest {
            merchant_uuid: merchant_uuid.to_string(),
            bank_code: self.bank_code.clone(),
            account_number: self.account_number.clone(),
            account_holder_name: self.account_holder_name.clone(),
        }
    }
}

/// One step 5 menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    pub is_available: bool,
    pub image_url: String,
}

impl MenuItemInput {
    pub fn to_request(&self, merchant_uuid: &str) -> MenuItemRequest {
        MenuItemRequest {
            merchant_uuid: merchant_uuid.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            is_available: self.is_available,
            image_url: self.image_url.clone(),
        }
    }
}

/// Validate every menu item, failing on the first invalid one.
pub fn validate_menu_items(items: &[MenuItemInput]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(
            "At least one menu item is required".to_string(),
        ));
    }
    for item in items {
        item.validate()?;
    }
    Ok(())
}

/// Require the uuid issued by step 1 before a later step can be sent.
pub fn require_merchant_uuid(
    merchant_uuid: Option<&str>,
    step: WizardStep,
) -> Result<Uuid, CoreError> {
    match merchant_uuid {
        Some(uuid) if !uuid.is_empty() => Ok(uuid.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Step {} ({}) requires a merchant uuid; complete step 1 first",
            step.to_number(),
            step.label()
        ))),
    }
}

// ---------------------------------------------------------------------------
// Accumulated data
// ---------------------------------------------------------------------------

/// Every field collected across the six steps.
///
/// Fields stay populated after the wizard moves on so earlier steps can be
/// shown again without a refetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationData {
    // Step 1
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub work_area_id: String,

    // Step 2
    pub merchant_name: String,
    pub store_name: String,
    pub category_id: Option<DbId>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_phone: String,
    pub operation_hours: Vec<OperationHourItem>,

    // Step 3
    pub id_card_number: String,
    pub id_card_image: String,
    pub selfie_image: String,
    pub store_front_image: String,
    pub store_inside_image: String,

    // Step 4
    pub bank_code: String,
    pub account_number: String,
    pub account_holder_name: String,

    // Step 5
    pub menu_items: Vec<MenuItemInput>,

    // Step 6
    pub declaration_agreement: bool,
    pub submit_date: String,
}

impl Default for RegistrationData {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            work_area_id: String::new(),
            merchant_name: String::new(),
            store_name: String::new(),
            category_id: None,
            address: String::new(),
            latitude: None,
            longitude: None,
            contact_phone: String::new(),
            operation_hours: Vec::new(),
            id_card_number: String::new(),
            id_card_image: String::new(),
            selfie_image: String::new(),
            store_front_image: String::new(),
            store_inside_image: String::new(),
            bank_code: String::new(),
            account_number: String::new(),
            account_holder_name: String::new(),
            menu_items: Vec::new(),
            declaration_agreement: false,
            submit_date: submit_date_today(),
        }
    }
}

fn merge_field<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

impl RegistrationData {
    pub fn apply_register(&mut self, req: &RegisterRequest) {
        self.full_name = req.full_name.clone();
        self.email = req.email.clone();
        self.phone_number = req.phone_number.clone();
        self.work_area_id = req.work_area_id.clone();
    }

    /// Record step 2 values, with coordinates as actually sent.
    pub fn apply_profile(&mut self, input: &ProfileInput) {
        self.merchant_name = input.merchant_name.clone();
        self.category_id = Some(input.category_id);
        self.address = input.address.clone();
        self.latitude = Some(coerce_coordinate(input.latitude));
        self.longitude = Some(coerce_coordinate(input.longitude));
        self.contact_phone = input.contact_phone.clone();
        self.operation_hours = input.operation_hours.clone();
    }

    pub fn apply_documents(&mut self, input: &DocumentsInput) {
        self.id_card_number = input.id_card_number.clone();
        self.id_card_image = input.id_card_image.clone();
        self.selfie_image = input.selfie_image.clone();
        self.store_front_image = input.store_front_image.clone();
        self.store_inside_image = input.store_inside_image.clone();
    }

    pub fn apply_bank_account(&mut self, input: &BankAccountInput) {
        self.bank_code = input.bank_code.clone();
        self.account_number = input.account_number.clone();
        self.account_holder_name = input.account_holder_name.clone();
    }

    /// Merge a waiting profile. Only fields the backend reports overwrite
    /// local values; absent fields keep what was already collected.
    pub fn apply_waiting_profile(&mut self, profile: &WaitingProfile) {
        if let Some(name) = &profile.store_name {
            self.store_name = name.clone();
            self.merchant_name = name.clone();
        }
        if profile.category_id.is_some() {
            self.category_id = profile.category_id;
        }
        merge_field(&mut self.address, &profile.address);
        if profile.latitude.is_some() {
            self.latitude = profile.latitude;
        }
        if profile.longitude.is_some() {
            self.longitude = profile.longitude;
        }
        merge_field(&mut self.work_area_id, &profile.work_area_id);
        merge_field(&mut self.contact_phone, &profile.contact_phone);
        merge_field(&mut self.operation_hours, &profile.operation_hours);
        merge_field(&mut self.id_card_number, &profile.id_card_number);
        merge_field(&mut self.id_card_image, &profile.id_card_image_url);
        merge_field(&mut self.selfie_image, &profile.selfie_image_url);
        merge_field(&mut self.store_front_image, &profile.store_front_image_url);
        merge_field(&mut self.store_inside_image, &profile.store_inside_image_url);
        merge_field(&mut self.bank_code, &profile.bank_code);
        merge_field(&mut self.account_number, &profile.account_number);
        merge_field(&mut self.account_holder_name, &profile.account_holder_name);
    }
}

/// Step 6 body, stamped with today's date.
pub fn submit_onboarding_request(merchant_uuid: &str, declaration: bool) -> SubmitOnboardingRequest {
    SubmitOnboardingRequest {
        merchant_uuid: merchant_uuid.to_string(),
        declaration_agreement: declaration,
        submit_date: submit_date_today(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
