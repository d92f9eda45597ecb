//! Session lifecycle: restore, login, register, logout.

use super::{AppState, AuthView, DashboardController};
use crate::api::error::ApiError;
use crate::consts::cli_consts::{TOKEN_KEY, USER_KEY};
use crate::models::{LoginForm, LoginResponse, RegisterForm, Session, User};

impl DashboardController {
    /// Restores a persisted session and loads the matching dashboard.
    ///
    /// Returns `false`, without any network traffic, when no complete session is stored.
    pub async fn check_auth(&mut self) -> bool {
        if !self.restore_session() {
            return false;
        }
        self.load_dashboard().await;
        true
    }

    /// Restores a persisted session without loading any dashboard data.
    pub fn restore_session(&mut self) -> bool {
        let (Some(token), Some(user_json)) = (self.read_key(TOKEN_KEY), self.read_key(USER_KEY))
        else {
            return false;
        };
        let user: User = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Ignoring stored user that failed to decode: {}", e);
                return false;
            }
        };
        log::debug!("Restored session for {}", user.display_name());
        self.api.set_token(Some(token.clone()));
        self.state.session = Some(Session {
            access_token: token,
            current_user: user,
        });
        true
    }

    /// Logs in with the current login form.
    ///
    /// On success the session is kept in memory and in storage, the form is
    /// cleared and the role's dashboard is loaded. On failure nothing changes.
    pub async fn login(&mut self) -> Result<(), ApiError> {
        let result = self.api.login(&self.state.login_form).await;
        let LoginResponse {
            access_token, user, ..
        } = self.surface("Login", result)?;

        log::info!("Logged in as {} ({})", user.display_name(), user.role);
        self.api.set_token(Some(access_token.clone()));
        self.persist_session(&access_token, &user);
        self.state.session = Some(Session {
            access_token,
            current_user: user,
        });
        self.state.login_form = LoginForm::default();
        self.load_dashboard().await;
        Ok(())
    }

    /// Creates an account from the register form, then switches back to the login form.
    pub async fn register(&mut self) -> Result<(), ApiError> {
        let result = self.api.register(&self.state.register_form).await;
        let response = self.surface("Registration", result)?;

        self.presenter
            .notify(response.message_or("Registration successful! Please login."));
        self.state.register_form = RegisterForm::default();
        self.state.auth_view = AuthView::Login;
        Ok(())
    }

    pub fn show_register(&mut self, show: bool) {
        self.state.auth_view = if show {
            AuthView::Register
        } else {
            AuthView::Login
        };
    }

    /// Drops the session from memory and storage. No backend call is made.
    pub fn logout(&mut self) {
        self.api.set_token(None);
        if let Err(e) = self.store.remove(&[TOKEN_KEY, USER_KEY]) {
            log::warn!("Failed to clear stored session: {}", e);
        }
        self.state = AppState::default();
        log::info!("Logged out");
    }

    /// Re-reads the current user from the backend and stores the fresh copy.
    pub async fn refresh_profile(&mut self) -> Result<(), ApiError> {
        if !self.state.is_logged_in() {
            log::warn!("Profile refresh requested without a session");
            return Ok(());
        }
        let result = self.api.get_profile().await;
        let user = self.surface("Loading profile", result)?;

        if let Some(session) = self.state.session.as_mut() {
            let token = session.access_token.clone();
            session.current_user = user.clone();
            self.persist_session(&token, &user);
        }
        Ok(())
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read '{}' from session storage: {}", key, e);
                None
            }
        }
    }

    fn persist_session(&self, token: &str, user: &User) {
        let user_json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode user for storage: {}", e);
                return;
            }
        };
        if let Err(e) = self
            .store
            .set_many(&[(TOKEN_KEY, token), (USER_KEY, user_json.as_str())])
        {
            log::warn!("Failed to persist session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{AuthView, View};
    use crate::models::{LoginResponse, MessageResponse, Role};
    use crate::presenter::MockPresenter;
    use crate::storage::{FileStore, KeyValueStore, StorageError};
    use mockall::predicate::eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// File store that counts how many writes reach the disk.
    struct CountingStore {
        inner: FileStore,
        writes: Arc<AtomicUsize>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set_many(entries)
        }

        fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(keys)
        }
    }

    #[tokio::test]
    /// alice logs in as a regular user: session stored, three dashboard reads.
    async fn test_login_stores_session_and_loads_user_dashboard() {
        let dir = tempdir().unwrap();
        let mut api = crate::api::MockParkingApi::new();
        api.expect_login()
            .withf(|form| form.username == "alice" && form.password == "pw")
            .times(1)
            .returning(|_| {
                Ok(LoginResponse {
                    access_token: "T".to_string(),
                    user: user(1, Role::User),
                    message: Some("Login successful".to_string()),
                })
            });
        api.expect_set_token()
            .with(eq(Some("T".to_string())))
            .times(1)
            .returning(|_| ());
        expect_user_dashboard(&mut api);

        let mut controller = controller(api, MockPresenter::new(), dir.path());
        controller.login_form_mut().username = "alice".to_string();
        controller.login_form_mut().password = "pw".to_string();

        controller.login().await.unwrap();

        let state = controller.state();
        assert!(state.is_logged_in());
        assert_eq!(state.view(), View::User);
        assert_eq!(state.session.as_ref().unwrap().access_token, "T");
        assert!(state.login_form.username.is_empty());
        assert!(state.login_form.password.is_empty());
        assert_eq!(state.available_lots.len(), 2);

        let store = store(dir.path());
        assert_eq!(store.get("token").unwrap(), Some("T".to_string()));
        let stored_user: crate::models::User =
            serde_json::from_str(&store.get("user").unwrap().unwrap()).unwrap();
        assert_eq!(stored_user.id, 1);
    }

    #[tokio::test]
    /// Token and user are written together, never one without the other.
    async fn test_login_persists_session_in_one_write() {
        let dir = tempdir().unwrap();
        let mut api = api();
        api.expect_login().times(1).returning(|_| {
            Ok(LoginResponse {
                access_token: "T".to_string(),
                user: user(1, Role::User),
                message: None,
            })
        });
        expect_user_dashboard(&mut api);
        let writes = Arc::new(AtomicUsize::new(0));
        let counting = CountingStore {
            inner: store(dir.path()),
            writes: writes.clone(),
        };

        let mut controller = super::super::DashboardController::new(
            Box::new(api),
            Box::new(MockPresenter::new()),
            Box::new(counting),
        );
        controller.login().await.unwrap();

        assert_eq!(writes.load(Ordering::SeqCst), 1);
        let store = store(dir.path());
        assert_eq!(store.get("token").unwrap(), Some("T".to_string()));
        assert!(store.get("user").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_admin_login_loads_admin_dashboard_once() {
        let dir = tempdir().unwrap();
        let mut api = api();
        api.expect_login().times(1).returning(|_| {
            Ok(LoginResponse {
                access_token: "A".to_string(),
                user: user(7, Role::Admin),
                message: None,
            })
        });
        expect_admin_dashboard(&mut api, vec![lot(1)]);

        let mut controller = controller(api, MockPresenter::new(), dir.path());
        controller.login().await.unwrap();

        assert_eq!(controller.state().view(), View::Admin);
        assert_eq!(controller.state().parking_lots.len(), 1);
        assert_eq!(controller.state().users.len(), 2);
    }

    #[tokio::test]
    /// Bad credentials: message alerted, nothing stored, still logged out.
    async fn test_failed_login_leaves_session_unchanged() {
        let dir = tempdir().unwrap();
        let mut api = crate::api::MockParkingApi::new();
        api.expect_login()
            .times(1)
            .returning(|_| Err(http_error(401, "Invalid credentials")));
        let mut presenter = MockPresenter::new();
        presenter
            .expect_alert()
            .with(eq("Invalid credentials"))
            .times(1)
            .returning(|_| ());

        let mut controller = controller(api, presenter, dir.path());
        controller.login_form_mut().username = "alice".to_string();

        assert!(controller.login().await.is_err());
        assert!(!controller.state().is_logged_in());
        assert_eq!(controller.state().login_form.username, "alice");
        assert!(!dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "T", &user(1, Role::User));

        let mut api = crate::api::MockParkingApi::new();
        api.expect_set_token()
            .with(eq(Some("T".to_string())))
            .times(1)
            .returning(|_| ());
        api.expect_set_token()
            .with(eq(None::<String>))
            .times(1)
            .returning(|_| ());

        let mut controller = controller(api, MockPresenter::new(), dir.path());
        assert!(controller.restore_session());
        assert!(controller.state().is_logged_in());

        controller.logout();

        assert!(!controller.state().is_logged_in());
        assert_eq!(
            controller.state().view(),
            View::Unauthenticated(AuthView::Login)
        );
        let store = store(dir.path());
        assert_eq!(store.get("token").unwrap(), None);
        assert_eq!(store.get("user").unwrap(), None);
    }

    #[test]
    fn test_logout_without_session_is_harmless() {
        let dir = tempdir().unwrap();
        let mut controller = controller(api(), MockPresenter::new(), dir.path());
        controller.logout();
        assert!(!controller.state().is_logged_in());
    }

    #[tokio::test]
    async fn test_check_auth_restores_and_loads_dashboard() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "A", &user(7, Role::Admin));
        let mut api = api();
        expect_admin_dashboard(&mut api, vec![lot(1), lot(2)]);

        let mut controller = controller(api, MockPresenter::new(), dir.path());
        assert!(controller.check_auth().await);
        assert_eq!(controller.state().view(), View::Admin);
        assert_eq!(controller.state().parking_lots.len(), 2);
    }

    #[tokio::test]
    /// A token without a user (or a corrupt user) is not a session; no requests are made.
    async fn test_check_auth_requires_token_and_user() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        store.set("token", "T").unwrap();

        let mut controller = controller(
            crate::api::MockParkingApi::new(),
            MockPresenter::new(),
            dir.path(),
        );
        assert!(!controller.check_auth().await);

        store.set("user", "{not json").unwrap();
        assert!(!controller.check_auth().await);
        assert!(!controller.state().is_logged_in());
    }

    #[tokio::test]
    async fn test_register_resets_form_and_returns_to_login() {
        let dir = tempdir().unwrap();
        let mut api = crate::api::MockParkingApi::new();
        api.expect_register()
            .withf(|form| form.username == "bob" && form.email == "bob@example.com")
            .times(1)
            .returning(|_| Ok(MessageResponse::new("User registered successfully")));
        let mut presenter = MockPresenter::new();
        presenter
            .expect_notify()
            .with(eq("User registered successfully"))
            .times(1)
            .returning(|_| ());

        let mut controller = controller(api, presenter, dir.path());
        controller.show_register(true);
        controller.register_form_mut().username = "bob".to_string();
        controller.register_form_mut().email = "bob@example.com".to_string();
        controller.register_form_mut().password = "secret".to_string();

        controller.register().await.unwrap();

        assert_eq!(
            controller.state().view(),
            View::Unauthenticated(AuthView::Login)
        );
        assert!(controller.state().register_form.username.is_empty());
        assert!(!controller.state().is_logged_in());
    }

    #[tokio::test]
    async fn test_register_failure_keeps_form() {
        let dir = tempdir().unwrap();
        let mut api = crate::api::MockParkingApi::new();
        api.expect_register()
            .times(1)
            .returning(|_| Err(http_error(400, "Username already exists")));
        let mut presenter = MockPresenter::new();
        presenter
            .expect_alert()
            .with(eq("Username already exists"))
            .times(1)
            .returning(|_| ());

        let mut controller = controller(api, presenter, dir.path());
        controller.show_register(true);
        controller.register_form_mut().username = "bob".to_string();

        assert!(controller.register().await.is_err());
        assert_eq!(controller.state().auth_view, AuthView::Register);
        assert_eq!(controller.state().register_form.username, "bob");
    }

    #[tokio::test]
    async fn test_refresh_profile_updates_stored_user() {
        let dir = tempdir().unwrap();
        persist_session(dir.path(), "T", &user(1, Role::User));
        let mut api = api();
        api.expect_get_profile().times(1).returning(|| {
            let mut fresh = user(1, Role::User);
            fresh.email = "alice@example.com".to_string();
            Ok(fresh)
        });

        let mut controller = controller(api, MockPresenter::new(), dir.path());
        assert!(controller.restore_session());
        controller.refresh_profile().await.unwrap();

        assert_eq!(
            controller.state().current_user().unwrap().email,
            "alice@example.com"
        );
        let stored = store(dir.path()).get("user").unwrap().unwrap();
        assert!(stored.contains("alice@example.com"));
        assert_eq!(
            store(dir.path()).get("token").unwrap(),
            Some("T".to_string())
        );
    }
}
