//! "Access denied" dialog state, opened when the backend answers 403.

use rideops_client::AppEvent;
use rideops_core::i18n::{translate, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenDialog {
    open: bool,
    title: String,
    description: String,
    language: Language,
}

impl ForbiddenDialog {
    pub fn new(language: Language) -> Self {
        Self {
            open: false,
            title: default_title(language),
            description: default_description(language),
            language,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Open the dialog. Missing or empty texts use the localized defaults.
    pub fn show(&mut self, title: Option<&str>, description: Option<&str>) {
        self.open = true;
        self.title = non_empty(title).unwrap_or_else(|| default_title(self.language));
        self.description =
            non_empty(description).unwrap_or_else(|| default_description(self.language));
    }

    /// Close, keeping the texts.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Open on [`AppEvent::AccessDenied`], showing the backend's message
    /// as the description; follow [`AppEvent::LanguageChanged`].
    pub fn apply(&mut self, event: &AppEvent) {
        match event {
            AppEvent::AccessDenied { message } => {
                tracing::debug!(?message, "Access denied");
                self.show(None, message.as_deref());
            }
            AppEvent::LanguageChanged { language } => self.set_language(*language),
            AppEvent::SessionExpired | AppEvent::StoreChanged { .. } => {}
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn default_title(language: Language) -> String {
    translate(language, "forbidden.title")
}

fn default_description(language: Language) -> String {
    translate(language, "forbidden.description")
}
