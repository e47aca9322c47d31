//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{FileStore, SessionStore, StoreError};

use crate::services::data_dir;

/// Session store used by the app: the token persisted under [`data_dir`].
pub type AppSessionStore = SessionStore<FileStore>;

/// Create the platform session store.
pub fn make_session_store() -> AppSessionStore {
    SessionStore::new(FileStore::new(data_dir()))
}

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    /// True until the persisted token has been read at startup.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn authenticated(token: String) -> Self {
        Self {
            token: Some(token),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            token: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates on login, logout and account deletion.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

/// Persist `token` and mark the session authenticated.
pub async fn sign_in(
    mut session: Signal<SessionState>,
    store: AppSessionStore,
    token: String,
) -> Result<(), StoreError> {
    store.set(&token).await?;
    session.set(SessionState::authenticated(token));
    tracing::info!("Signed in");
    Ok(())
}

/// Forget the token. The session signal is reset even if the store fails,
/// so the protected screens close either way.
pub async fn sign_out(
    mut session: Signal<SessionState>,
    store: AppSessionStore,
) -> Result<(), StoreError> {
    let result = store.clear().await;
    session.set(SessionState::signed_out());
    tracing::info!("Signed out");
    result
}

/// Provider component that loads the persisted session once at startup.
/// Wrap your app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_context_provider(make_session_store);
    let mut session = use_signal(SessionState::default);

    let _ = use_resource(move || {
        let store = store.clone();
        async move {
            let token = store.load().await;
            tracing::info!(authenticated = token.is_some(), "Session loaded");
            session.set(SessionState {
                token,
                loading: false,
            });
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
