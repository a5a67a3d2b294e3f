//! Signed-in session state shared by the HTTP client and the stores.

use std::sync::{Arc, RwLock};

use rideops_core::i18n::Language;

use crate::storage::{KeyValueStore, KEY_FCM_TOKEN, KEY_LANGUAGE, KEY_TOKEN};

/// Token, language, and push token, mirrored into a [`KeyValueStore`].
///
/// Values are read once from storage at construction; afterwards the
/// in-memory copy is authoritative and every change is written through.
/// A failed write is logged and the in-memory value kept.
pub struct Session {
    storage: Arc<dyn KeyValueStore>,
    token: RwLock<Option<String>>,
    language: RwLock<Language>,
    fcm_token: RwLock<Option<String>>,
}

fn read<T: Clone>(lock: &RwLock<T>) -> T {
    lock.read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn write<T>(lock: &RwLock<T>, value: T) {
    *lock.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
}

impl Session {
    pub fn new(storage: Arc<dyn KeyValueStore>, default_language: Language) -> Self {
        let token = storage.get(KEY_TOKEN);
        let language = match storage.get(KEY_LANGUAGE) {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring persisted language");
                default_language
            }),
            None => default_language,
        };
        let fcm_token = storage.get(KEY_FCM_TOKEN);

        tracing::debug!(
            has_token = token.is_some(),
            language = language.as_str(),
            "Session restored"
        );

        Self {
            storage,
            token: RwLock::new(token),
            language: RwLock::new(language),
            fcm_token: RwLock::new(fcm_token),
        }
    }

    /// Raw stored token, as persisted.
    pub fn token(&self) -> Option<String> {
        read(&self.token)
    }

    /// Token to send as a bearer credential: trimmed, and `None` when blank.
    pub fn bearer_token(&self) -> Option<String> {
        self.token()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        write(&self.token, Some(token.to_string()));
        self.persist(KEY_TOKEN, Some(token));
    }

    pub fn clear_token(&self) {
        write(&self.token, None);
        self.persist(KEY_TOKEN, None);
    }

    pub fn language(&self) -> Language {
        read(&self.language)
    }

    pub fn set_language(&self, language: Language) {
        write(&self.language, language);
        self.persist(KEY_LANGUAGE, Some(language.as_str()));
    }

    pub fn fcm_token(&self) -> Option<String> {
        read(&self.fcm_token)
    }

    pub fn set_fcm_token(&self, token: &str) {
        write(&self.fcm_token, Some(token.to_string()));
        self.persist(KEY_FCM_TOKEN, Some(token));
    }

    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(v) => self.storage.set(key, v),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Failed to persist session value");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .field("language", &self.language())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn storage_with(entries: &[(&str, &str)]) -> Arc<MemoryStorage> {
        let storage = Arc::new(MemoryStorage::new());
        for (k, v) in entries {
            storage.set(k, v).unwrap();
        }
        storage
    }

    #[test]
    fn restores_persisted_values() {
        let storage = storage_with(&[(KEY_TOKEN, "abc"), (KEY_LANGUAGE, "id")]);
        let session = Session::new(storage, Language::En);
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.language(), Language::Id);
        assert_eq!(session.fcm_token(), None);
    }

    #[test]
    fn unknown_persisted_language_uses_default() {
        let storage = storage_with(&[(KEY_LANGUAGE, "fr")]);
        let session = Session::new(storage, Language::Id);
        assert_eq!(session.language(), Language::Id);
    }

    #[test]
    fn bearer_token_is_trimmed_and_blank_is_none() {
        let storage = storage_with(&[(KEY_TOKEN, "  tok \n")]);
        let session = Session::new(storage, Language::En);
        assert_eq!(session.bearer_token().as_deref(), Some("tok"));

        session.set_token("   ");
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn changes_write_through() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone(), Language::En);

        session.set_token("t1");
        session.set_language(Language::Id);
        session.set_fcm_token("fcm");
        assert_eq!(storage.get(KEY_TOKEN).as_deref(), Some("t1"));
        assert_eq!(storage.get(KEY_LANGUAGE).as_deref(), Some("id"));
        assert_eq!(storage.get(KEY_FCM_TOKEN).as_deref(), Some("fcm"));

        session.clear_token();
        assert_eq!(storage.get(KEY_TOKEN), None);
    }
}
