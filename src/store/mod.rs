//! Application-wide UI state.
//!
//! [`AppStore`] is an explicit value handed to components through a Yew
//! context rather than a global. Only theme, sidebar and credits survive a
//! reload; they are written through a [`StoreBackend`] after every change.

pub mod backend;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;
use yew::prelude::*;

pub use backend::{LocalStorageBackend, MemoryBackend, StoreBackend};

use crate::models::user::User;

/// Theme preference of the user.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System, // Follow system preference
}

/// The part of the store kept across sessions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub credits: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub enum StoreAction {
    SetUser(Option<User>),
    SetAuthenticated(bool),
    SetSidebarOpen(bool),
    ToggleSidebar,
    SetTheme(Theme),
    SetCredits(u32),
    SetCurrentExam(Option<String>),
    Reset,
}

#[derive(Clone)]
pub struct AppStore {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub sidebar_open: bool,
    pub theme: Theme,
    pub credits: u32,
    pub current_exam: Option<String>,
    backend: Rc<dyn StoreBackend>,
}

impl PartialEq for AppStore {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
            && self.is_authenticated == other.is_authenticated
            && self.sidebar_open == other.sidebar_open
            && self.theme == other.theme
            && self.credits == other.credits
            && self.current_exam == other.current_exam
            && Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("user", &self.user)
            .field("is_authenticated", &self.is_authenticated)
            .field("sidebar_open", &self.sidebar_open)
            .field("theme", &self.theme)
            .field("credits", &self.credits)
            .field("current_exam", &self.current_exam)
            .finish_non_exhaustive()
    }
}

impl AppStore {
    /// Creates a store with default values, without reading the backend.
    pub fn new(backend: Rc<dyn StoreBackend>) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            sidebar_open: true,
            theme: Theme::default(),
            credits: 0,
            current_exam: None,
            backend,
        }
    }

    /// Creates a store and restores the persisted slice from `backend`.
    /// Unreadable data is logged and replaced by defaults.
    pub fn load(backend: Rc<dyn StoreBackend>) -> Self {
        let mut store = Self::new(backend);
        match store.backend.load() {
            Ok(Some(persisted)) => store.restore(persisted),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "stored preferences unreadable, using defaults"),
        }
        store
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            theme: self.theme,
            sidebar_open: self.sidebar_open,
            credits: self.credits,
        }
    }

    /// Applies `action` and writes the persisted slice if it changed.
    pub fn dispatch(&mut self, action: StoreAction) {
        let before = self.persisted();

        match action {
            StoreAction::SetUser(user) => self.user = user,
            StoreAction::SetAuthenticated(authenticated) => self.is_authenticated = authenticated,
            StoreAction::SetSidebarOpen(open) => self.sidebar_open = open,
            StoreAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            StoreAction::SetTheme(theme) => self.theme = theme,
            StoreAction::SetCredits(credits) => self.credits = credits,
            StoreAction::SetCurrentExam(exam_id) => self.current_exam = exam_id,
            StoreAction::Reset => *self = Self::new(Rc::clone(&self.backend)),
        }

        let after = self.persisted();
        if after != before {
            if let Err(e) = self.backend.save(&after) {
                warn!(error = %e, "failed to persist preferences");
            }
        }
    }

    fn restore(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
        self.sidebar_open = persisted.sidebar_open;
        self.credits = persisted.credits;
    }
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.dispatch(action);
        Rc::new(next)
    }
}

/// Handle shared with components through `ContextProvider`.
pub type StoreContext = UseReducerHandle<AppStore>;

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> (Rc<MemoryBackend>, AppStore) {
        let backend = Rc::new(MemoryBackend::new());
        let store = AppStore::load(backend.clone());
        (backend, store)
    }

    #[test]
    fn test_defaults() {
        let (backend, store) = memory_store();
        assert!(store.user.is_none());
        assert!(!store.is_authenticated);
        assert!(store.sidebar_open);
        assert_eq!(store.theme, Theme::System);
        assert_eq!(store.credits, 0);
        assert_eq!(backend.raw(), None);
    }

    #[test]
    fn test_only_persisted_fields_are_saved() {
        let (backend, mut store) = memory_store();

        store.dispatch(StoreAction::SetCurrentExam(Some("exam-1".to_string())));
        assert_eq!(backend.raw(), None);

        store.dispatch(StoreAction::SetCredits(42));
        let saved: PersistedState = serde_json::from_str(&backend.raw().unwrap()).unwrap();
        assert_eq!(
            saved,
            PersistedState {
                theme: Theme::System,
                sidebar_open: true,
                credits: 42
            }
        );
    }

    #[test]
    fn test_restore_on_load() {
        let backend = Rc::new(MemoryBackend::with_raw(
            r#"{"theme":"dark","sidebar_open":false,"credits":17}"#,
        ));
        let store = AppStore::load(backend);

        assert_eq!(store.theme, Theme::Dark);
        assert!(!store.sidebar_open);
        assert_eq!(store.credits, 17);
        assert!(!store.is_authenticated);
    }

    #[test]
    fn test_corrupt_data_falls_back_to_defaults() {
        let backend = Rc::new(MemoryBackend::with_raw("{not json"));
        let store = AppStore::load(backend);
        assert_eq!(store.theme, Theme::System);
        assert!(store.sidebar_open);
    }

    #[test]
    fn test_toggle_sidebar_and_reset() {
        let (backend, mut store) = memory_store();
        store.dispatch(StoreAction::ToggleSidebar);
        assert!(!store.sidebar_open);

        store.dispatch(StoreAction::SetAuthenticated(true));
        store.dispatch(StoreAction::Reset);
        assert!(store.sidebar_open);
        assert!(!store.is_authenticated);

        let saved: PersistedState = serde_json::from_str(&backend.raw().unwrap()).unwrap();
        assert!(saved.sidebar_open);
    }

    #[test]
    fn test_reduce_returns_new_store() {
        let (_, store) = memory_store();
        let store = Rc::new(store);
        let next = Rc::clone(&store).reduce(StoreAction::SetTheme(Theme::Light));

        assert_eq!(store.theme, Theme::System);
        assert_eq!(next.theme, Theme::Light);
    }
}
