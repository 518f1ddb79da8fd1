//! Route table and access rules - domain model.
//!
//! Pure logic with no DOM or web_sys dependency. The route set is a closed
//! enum, so an unknown route key is unrepresentable: typos fail at compile
//! time instead of becoming a runtime branch.

use portal_shared::Role;
use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteKey {
    /// Login page (default route)
    #[default]
    Login,
    /// Signup page
    Signup,
    /// Authenticated landing page
    Dashboard,
    /// Admin-only console
    Admin,
    /// Page not found
    NotFound,
}

/// Static access rule for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
    pub auth_required: bool,
}

/// Guard decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

const GUEST_ONLY: &[Role] = &[Role::Guest];
const AUTHENTICATED: &[Role] = &[Role::Admin, Role::CollegeAdmin, Role::Student];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const EVERYONE: &[Role] = &[Role::Admin, Role::CollegeAdmin, Role::Student, Role::Guest];

impl RouteKey {
    /// Parses a URL path into a route. Anything unrecognized is `NotFound`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// The static descriptor table, one arm per route.
    pub const fn descriptor(&self) -> RouteDescriptor {
        match self {
            Self::Login => RouteDescriptor {
                path: "/login",
                allowed_roles: GUEST_ONLY,
                auth_required: false,
            },
            Self::Signup => RouteDescriptor {
                path: "/signup",
                allowed_roles: GUEST_ONLY,
                auth_required: false,
            },
            Self::Dashboard => RouteDescriptor {
                path: "/dashboard",
                allowed_roles: AUTHENTICATED,
                auth_required: true,
            },
            Self::Admin => RouteDescriptor {
                path: "/admin",
                allowed_roles: ADMIN_ONLY,
                auth_required: true,
            },
            Self::NotFound => RouteDescriptor {
                path: "/404",
                allowed_roles: EVERYONE,
                auth_required: false,
            },
        }
    }

    pub const fn to_path(&self) -> &'static str {
        self.descriptor().path
    }

    /// Where a denied, unauthenticated navigation lands.
    pub const fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Where an authenticated principal lands when leaving a guest page.
    pub const fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// The guard decision for one navigation attempt. An absent principal is
/// treated as `Guest`. Denied when the route requires authentication and
/// the principal is absent, or when the role is not in the allowed set.
pub fn check_access(route: RouteKey, principal: Option<Role>) -> Access {
    let desc = route.descriptor();
    let role = principal.unwrap_or(Role::Guest);

    if desc.auth_required && !role.is_authenticated() {
        return Access::Denied;
    }
    if !desc.allowed_roles.contains(&role) {
        return Access::Denied;
    }
    Access::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [RouteKey; 5] = [
        RouteKey::Login,
        RouteKey::Signup,
        RouteKey::Dashboard,
        RouteKey::Admin,
        RouteKey::NotFound,
    ];

    #[test]
    fn guest_is_denied_on_dashboard() {
        assert_eq!(check_access(RouteKey::Dashboard, None), Access::Denied);
        assert_eq!(
            check_access(RouteKey::Dashboard, Some(Role::Guest)),
            Access::Denied
        );
    }

    #[test]
    fn admin_is_allowed_on_admin_console() {
        assert_eq!(
            check_access(RouteKey::Admin, Some(Role::Admin)),
            Access::Allowed
        );
    }

    #[test]
    fn non_admin_roles_are_denied_on_admin_console() {
        assert_eq!(
            check_access(RouteKey::Admin, Some(Role::Student)),
            Access::Denied
        );
        assert_eq!(
            check_access(RouteKey::Admin, Some(Role::CollegeAdmin)),
            Access::Denied
        );
    }

    #[test]
    fn authenticated_principals_are_denied_on_login() {
        for role in [Role::Admin, Role::CollegeAdmin, Role::Student] {
            assert_eq!(check_access(RouteKey::Login, Some(role)), Access::Denied);
        }
        // Only the anonymous visitor may see the login page.
        assert_eq!(check_access(RouteKey::Login, None), Access::Allowed);
    }

    #[test]
    fn every_authenticated_role_reaches_the_dashboard() {
        for role in [Role::Admin, Role::CollegeAdmin, Role::Student] {
            assert_eq!(check_access(RouteKey::Dashboard, Some(role)), Access::Allowed);
        }
    }

    #[test]
    fn unknown_paths_parse_to_not_found() {
        assert_eq!(RouteKey::from_path("/nope"), RouteKey::NotFound);
        assert_eq!(RouteKey::from_path(""), RouteKey::NotFound);
    }

    #[test]
    fn path_round_trip_for_real_routes() {
        for route in [RouteKey::Login, RouteKey::Signup, RouteKey::Dashboard, RouteKey::Admin] {
            assert_eq!(RouteKey::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn table_invariant_auth_required_excludes_guest() {
        for route in ALL_ROUTES {
            let desc = route.descriptor();
            if desc.auth_required {
                assert!(
                    !desc.allowed_roles.contains(&Role::Guest),
                    "{route} requires auth but admits Guest"
                );
            }
            if desc.allowed_roles == GUEST_ONLY {
                assert!(!desc.auth_required, "{route} is guest-only but requires auth");
            }
        }
    }
}
