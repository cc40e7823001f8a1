use contracts::domain::a010_shift::aggregate::{ClockInRequest, ClockOutRequest, Shift};
use contracts::system::auth::{LoginRequest, UserInfo};
use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::domain::a010_shift::api as shift_api;
use crate::shared::api_utils::{set_unauthorized_handler, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
    pub shift: Option<Shift>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn has_role(&self, required: UserRole) -> bool {
        self.role().map(|r| r.satisfies(required)).unwrap_or(false)
    }

    pub fn has_shift(&self) -> bool {
        self.shift.as_ref().map(Shift::is_open).unwrap_or(false)
    }

    /// Location of the active shift, if any.
    pub fn location_id(&self) -> Option<i64> {
        self.shift
            .as_ref()
            .filter(|s| s.is_open())
            .map(|s| s.location_id)
    }

    fn from_stored(session: storage::StoredSession) -> Self {
        Self {
            access_token: Some(session.access_token),
            user: session.user,
            shift: session.shift,
        }
    }

    fn to_stored(&self) -> Option<storage::StoredSession> {
        self.access_token.as_ref().map(|token| storage::StoredSession {
            access_token: token.clone(),
            user: self.user.clone(),
            shift: self.shift.clone(),
        })
    }
}

/// Session / shift context shared by the whole app.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    /// True while a stored session is being validated after a reload.
    pub restoring: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            restoring: RwSignal::new(false),
        }
    }

    fn commit(&self, next: AuthState) {
        match next.to_stored() {
            Some(session) => storage::save_session(&session),
            None => storage::clear_session(),
        }
        self.state.set(next);
    }

    /// Sign in, then load the user and any shift still open on the server.
    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let request = LoginRequest { username, password };
        request.validate().map_err(ApiError::Validation)?;

        let token = api::login(&request).await?;
        // The token must be stored before the follow-up requests can use it
        storage::save_session(&storage::StoredSession {
            access_token: token.access_token.clone(),
            user: None,
            shift: None,
        });

        let user = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                storage::clear_session();
                return Err(e);
            }
        };
        let shift = shift_api::fetch_current_shift().await.unwrap_or_else(|e| {
            log::warn!("Could not load current shift: {}", e);
            None
        });

        log::info!("Signed in as {} ({})", user.username, user.role.as_str());
        self.commit(AuthState {
            access_token: Some(token.access_token),
            user: Some(user),
            shift,
        });
        Ok(())
    }

    /// Drops the local session. An open shift stays open on the server.
    pub fn logout(&self) {
        if let Some(user) = self.state.with_untracked(|s| s.user.clone()) {
            log::info!("Signed out {}", user.username);
        }
        self.commit(AuthState::default());
    }

    pub async fn start_shift(&self, request: ClockInRequest) -> Result<Shift, ApiError> {
        request.validate().map_err(ApiError::Validation)?;
        let shift = shift_api::clock_in(&request).await?;
        log::info!("Shift {} started at location {}", shift.id, shift.location_id);
        let mut next = self.state.get_untracked();
        next.shift = Some(shift.clone());
        self.commit(next);
        Ok(shift)
    }

    pub async fn end_shift(&self, request: ClockOutRequest) -> Result<(), ApiError> {
        request.validate().map_err(ApiError::Validation)?;
        let ended = shift_api::clock_out(&request).await?;
        log::info!("Shift {} ended", ended.id);
        let mut next = self.state.get_untracked();
        next.shift = None;
        self.commit(next);
        Ok(())
    }

    /// Re-validate a stored session after a page reload.
    fn restore(&self) {
        let Some(session) = storage::load_session() else {
            return;
        };
        self.state.set(AuthState::from_stored(session));
        self.restoring.set(true);

        let ctx = *self;
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    let shift = shift_api::fetch_current_shift().await;
                    let mut next = ctx.state.get_untracked();
                    next.user = Some(user);
                    match shift {
                        Ok(shift) => next.shift = shift,
                        Err(e) => log::warn!("Could not refresh shift: {}", e),
                    }
                    ctx.commit(next);
                }
                // 401 already cleared the session through the handler
                Err(ApiError::Unauthorized) => {}
                Err(e) => log::warn!("Keeping stored session, validation failed: {}", e),
            }
            ctx.restoring.set(false);
        });
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new();

    set_unauthorized_handler(Callback::new(move |_| {
        log::info!("Session rejected by the API, signing out");
        ctx.state.set(AuthState::default());
    }));

    ctx.restore();
    provide_context(ctx);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: 1,
            username: "kim".into(),
            full_name: None,
            email: None,
            role,
        }
    }

    fn shift(ended: bool) -> Shift {
        Shift {
            id: 5,
            user_id: 1,
            location_id: 3,
            location_name: Some("Main St".into()),
            started_at: "2024-01-01T08:00:00Z".into(),
            ended_at: if ended { Some("2024-01-01T16:00:00Z".into()) } else { None },
            opening_cash: None,
        }
    }

    #[test]
    fn test_authenticated_requires_token_and_user() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());
        state.access_token = Some("t".into());
        assert!(!state.is_authenticated());
        state.user = Some(user(UserRole::Staff));
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_has_role() {
        let state = AuthState {
            access_token: Some("t".into()),
            user: Some(user(UserRole::Manager)),
            shift: None,
        };
        assert!(state.has_role(UserRole::Staff));
        assert!(state.has_role(UserRole::Manager));
        assert!(!state.has_role(UserRole::Admin));
        assert!(!AuthState::default().has_role(UserRole::Staff));
    }

    #[test]
    fn test_shift_helpers() {
        let mut state = AuthState::default();
        assert!(!state.has_shift());
        state.shift = Some(shift(false));
        assert!(state.has_shift());
        assert_eq!(state.location_id(), Some(3));
        state.shift = Some(shift(true));
        assert!(!state.has_shift());
        assert_eq!(state.location_id(), None);
    }

    #[test]
    fn test_stored_roundtrip() {
        let state = AuthState {
            access_token: Some("t".into()),
            user: Some(user(UserRole::Admin)),
            shift: Some(shift(false)),
        };
        let stored = state.to_stored().unwrap();
        assert_eq!(AuthState::from_stored(stored), state);
        assert!(AuthState::default().to_stored().is_none());
    }
}
