//! Language and breadcrumb state shared by every view.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rideops_client::{AppEvent, EventBus, Session};
use rideops_core::i18n::{translate, Language};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            label: label.into(),
            href: href.map(str::to_string),
        }
    }
}

pub struct UiStore {
    session: Arc<Session>,
    events: Arc<EventBus>,
    breadcrumbs: Vec<Breadcrumb>,
}

impl UiStore {
    pub fn new(session: Arc<Session>, events: Arc<EventBus>) -> Self {
        Self {
            session,
            events,
            breadcrumbs: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.session.language()
    }

    /// Switch language. Persisted, and announced with
    /// [`AppEvent::LanguageChanged`].
    pub fn set_language(&mut self, language: Language) {
        self.session.set_language(language);
        tracing::debug!(language = language.as_str(), "Language changed");
        self.events.publish(AppEvent::LanguageChanged { language });
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn set_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>) {
        self.breadcrumbs = breadcrumbs;
        self.events.publish(AppEvent::StoreChanged { store: "ui" });
    }

    /// Translate a dot path such as `"sidebar.dashboard"` in the current
    /// language. Unknown paths come back unchanged.
    pub fn t(&self, path: &str) -> String {
        translate(self.language(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rideops_client::storage::{KeyValueStore, MemoryStorage, KEY_LANGUAGE};

    fn ui(storage: Arc<MemoryStorage>) -> (UiStore, Arc<EventBus>) {
        let session = Arc::new(Session::new(storage, Language::En));
        let events = Arc::new(EventBus::default());
        (UiStore::new(session, events.clone()), events)
    }

    #[test]
    fn translates_in_current_language() {
        let (mut ui, _) = ui(Arc::new(MemoryStorage::new()));
        assert_eq!(ui.t("sidebar.dashboard"), "Dashboard");
        ui.set_language(Language::Id);
        assert_eq!(ui.t("sidebar.dashboard"), "Dasbor");
    }

    #[test]
    fn unknown_key_falls_back_to_path() {
        let (ui, _) = ui(Arc::new(MemoryStorage::new()));
        assert_eq!(ui.t("sidebar.nowhere"), "sidebar.nowhere");
    }

    #[test]
    fn language_is_persisted_and_announced() {
        let storage = Arc::new(MemoryStorage::new());
        let (mut ui, events) = ui(storage.clone());
        let mut rx = events.subscribe();

        ui.set_language(Language::Id);

        assert_eq!(storage.get(KEY_LANGUAGE).as_deref(), Some("id"));
        assert_eq!(
            rx.try_recv().unwrap(),
            AppEvent::LanguageChanged {
                language: Language::Id
            }
        );
    }

    #[test]
    fn breadcrumbs_replace_previous() {
        let (mut ui, _) = ui(Arc::new(MemoryStorage::new()));
        ui.set_breadcrumbs(vec![Breadcrumb::new("Dashboard", Some("/"))]);
        ui.set_breadcrumbs(vec![
            Breadcrumb::new("Merchants", Some("/merchants")),
            Breadcrumb::new("Detail", None),
        ]);
        assert_eq!(ui.breadcrumbs().len(), 2);
        assert_eq!(ui.breadcrumbs()[1].href, None);
    }
}
