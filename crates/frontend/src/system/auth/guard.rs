use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use thaw::Spinner;

use super::context::{use_auth, AuthState};

/// What a route asks of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    pub min_role: UserRole,
    pub needs_shift: bool,
}

impl RouteRequirement {
    pub const fn role(min_role: UserRole) -> Self {
        Self {
            min_role,
            needs_shift: false,
        }
    }

    pub const fn with_shift(min_role: UserRole) -> Self {
        Self {
            min_role,
            needs_shift: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allowed,
    Login,
    SelectShift,
    Forbidden,
}

/// Guard decision. Role is checked before the shift, so a clerk opening an
/// admin page is told so instead of being sent to clock in.
pub fn route_access(state: &AuthState, requirement: RouteRequirement) -> RouteAccess {
    if !state.is_authenticated() {
        return RouteAccess::Login;
    }
    if !state.has_role(requirement.min_role) {
        return RouteAccess::Forbidden;
    }
    if requirement.needs_shift && !state.has_shift() {
        return RouteAccess::SelectShift;
    }
    RouteAccess::Allowed
}

/// `None` while a stored session is still being restored.
pub fn guard_outcome(
    state: &AuthState,
    restoring: bool,
    requirement: RouteRequirement,
) -> Option<RouteAccess> {
    if restoring && !state.is_authenticated() {
        return None;
    }
    Some(route_access(state, requirement))
}

/// Renders children only when the session satisfies `requirement`.
///
/// Only a change of the outcome rebuilds the page; profile or shift updates
/// that keep access unchanged leave it mounted.
#[component]
pub fn ProtectedRoute(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let outcome = Memo::new(move |_| {
        let restoring = auth.restoring.get();
        auth.state.with(|s| guard_outcome(s, restoring, requirement))
    });

    move || match outcome.get() {
        None => view! {
            <div class="page-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Some(RouteAccess::Allowed) => children().into_any(),
        Some(RouteAccess::Login) => view! { <Redirect path="/login" /> }.into_any(),
        Some(RouteAccess::SelectShift) => view! { <Redirect path="/shift" /> }.into_any(),
        Some(RouteAccess::Forbidden) => view! {
            <AccessDenied required=requirement.min_role />
        }
        .into_any(),
    }
}

#[component]
fn AccessDenied(required: UserRole) -> impl IntoView {
    view! {
        <div class="access-denied">
            <h2>"Access denied"</h2>
            <p>{format!("This page requires the {} role.", required.label())}</p>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a010_shift::aggregate::Shift;
    use contracts::system::auth::UserInfo;

    fn state(role: Option<UserRole>, shift: bool) -> AuthState {
        AuthState {
            access_token: role.map(|_| "token".to_string()),
            user: role.map(|role| UserInfo {
                id: 7,
                username: "clerk".into(),
                full_name: None,
                email: None,
                role,
            }),
            shift: shift.then(|| Shift {
                id: 1,
                user_id: 7,
                location_id: 2,
                location_name: None,
                started_at: "2024-05-01T09:00:00Z".into(),
                ended_at: None,
                opening_cash: Some(100.0),
            }),
        }
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        let anon = state(None, false);
        assert_eq!(
            route_access(&anon, RouteRequirement::role(UserRole::Staff)),
            RouteAccess::Login
        );
        assert_eq!(
            route_access(&anon, RouteRequirement::with_shift(UserRole::Admin)),
            RouteAccess::Login
        );
    }

    #[test]
    fn test_role_hierarchy() {
        let staff = state(Some(UserRole::Staff), false);
        let manager = state(Some(UserRole::Manager), false);
        let admin = state(Some(UserRole::Admin), false);
        let needs_manager = RouteRequirement::role(UserRole::Manager);

        assert_eq!(route_access(&staff, needs_manager), RouteAccess::Forbidden);
        assert_eq!(route_access(&manager, needs_manager), RouteAccess::Allowed);
        assert_eq!(route_access(&admin, needs_manager), RouteAccess::Allowed);
        assert_eq!(
            route_access(&manager, RouteRequirement::role(UserRole::Admin)),
            RouteAccess::Forbidden
        );
    }

    #[test]
    fn test_shift_required() {
        let pos = RouteRequirement::with_shift(UserRole::Staff);
        assert_eq!(
            route_access(&state(Some(UserRole::Staff), false), pos),
            RouteAccess::SelectShift
        );
        assert_eq!(
            route_access(&state(Some(UserRole::Staff), true), pos),
            RouteAccess::Allowed
        );
    }

    #[test]
    fn test_role_checked_before_shift() {
        let txns = RouteRequirement::with_shift(UserRole::Manager);
        assert_eq!(
            route_access(&state(Some(UserRole::Staff), false), txns),
            RouteAccess::Forbidden
        );
    }

    #[test]
    fn test_outcome_unchanged_by_restore_and_clock_in() {
        let shift_page = RouteRequirement::role(UserRole::Staff);
        let before = state(Some(UserRole::Staff), false);
        let after = state(Some(UserRole::Staff), true);

        assert_eq!(guard_outcome(&state(None, false), true, shift_page), None);
        assert_eq!(
            guard_outcome(&before, true, shift_page),
            guard_outcome(&before, false, shift_page)
        );
        assert_eq!(
            guard_outcome(&before, false, shift_page),
            guard_outcome(&after, false, shift_page)
        );
        assert_eq!(
            guard_outcome(&after, false, shift_page),
            Some(RouteAccess::Allowed)
        );
        assert_eq!(
            guard_outcome(&state(None, false), false, shift_page),
            Some(RouteAccess::Login)
        );
    }
}
