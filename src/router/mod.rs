//! Page router
//!
//! Maps URL paths to pages, applying the route guard to protected pages
//! and building the session-dependent navigation bar.

use std::fmt;
use crate::config::FeaturesConfig;
use crate::middleware::guard::{GuardDecision, RouteGuard};
use crate::services::auth::{Role, Session, SessionProvider};
use crate::utils::logging::log_navigation;

/// Pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AboutUs,
    Events,
    Programs,
    Portfolio,
    Community,
    Register,
    Login,
    AdminDashboard,
    StartupDashboard,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Home,
        Route::AboutUs,
        Route::Events,
        Route::Programs,
        Route::Portfolio,
        Route::Community,
        Route::Register,
        Route::Login,
        Route::AdminDashboard,
        Route::StartupDashboard,
        Route::NotFound,
    ];

    /// Match a request path; query strings, fragments, trailing slashes and case are ignored
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim().trim_end_matches('/').to_lowercase();

        match path.as_str() {
            "" => Route::Home,
            "/aboutus" => Route::AboutUs,
            "/events" => Route::Events,
            "/programs" => Route::Programs,
            "/portfolio" => Route::Portfolio,
            "/community" => Route::Community,
            "/register" => Route::Register,
            "/login" => Route::Login,
            "/admin" => Route::AdminDashboard,
            "/startup" => Route::StartupDashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AboutUs => "/aboutus",
            Route::Events => "/events",
            Route::Programs => "/programs",
            Route::Portfolio => "/portfolio",
            Route::Community => "/community",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::AdminDashboard => "/admin",
            Route::StartupDashboard => "/startup",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AboutUs => "About",
            Route::Events => "Events",
            Route::Programs => "Programs",
            Route::Portfolio => "Portfolio",
            Route::Community => "Community",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::AdminDashboard => "Admin Dashboard",
            Route::StartupDashboard => "Startup Dashboard",
            Route::NotFound => "Not Found",
        }
    }

    /// Guard for protected pages; `None` for public ones
    pub fn guard(self) -> Option<RouteGuard> {
        match self {
            Route::AdminDashboard => Some(RouteGuard::require([Role::Admin])),
            Route::StartupDashboard => Some(RouteGuard::require([Role::Startup])),
            _ => None,
        }
    }

    /// Landing page after login
    pub fn dashboard_for(role: Role) -> Option<Route> {
        match role {
            Role::Admin => Some(Route::AdminDashboard),
            Role::Startup => Some(Route::StartupDashboard),
            Role::Guest => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { from: Route, to: Route },
}

impl Navigation {
    /// Page that ends up on screen
    pub fn page(self) -> Route {
        match self {
            Navigation::Render(route) => route,
            Navigation::Redirect { to, .. } => to,
        }
    }
}

/// Entry of the navigation bar; `route` is `None` for a label without a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Option<Route>,
}

impl NavItem {
    fn link(route: Route) -> Self {
        Self { title: route.title(), route: Some(route) }
    }
}

/// Title of the logout entry; it has no page of its own
pub const LOGOUT_TITLE: &str = "Logout";

#[derive(Debug, Clone)]
pub struct Router {
    admin_dashboard: bool,
    startup_dashboard: bool,
}

impl Router {
    pub fn new(features: &FeaturesConfig) -> Self {
        Self {
            admin_dashboard: features.admin_dashboard,
            startup_dashboard: features.startup_dashboard,
        }
    }

    fn is_enabled(&self, route: Route) -> bool {
        match route {
            Route::AdminDashboard => self.admin_dashboard,
            Route::StartupDashboard => self.startup_dashboard,
            _ => true,
        }
    }

    /// Resolve a path for the provider's current session
    pub fn resolve(&self, path: &str, provider: &impl SessionProvider) -> Navigation {
        let mut route = Route::from_path(path);
        if !self.is_enabled(route) {
            route = Route::NotFound;
        }

        let navigation = match route.guard().map(|guard| guard.evaluate(provider)) {
            None | Some(GuardDecision::Render) => Navigation::Render(route),
            Some(GuardDecision::RedirectToLogin) => Navigation::Redirect { from: route, to: Route::Login },
            Some(GuardDecision::RedirectHome) => Navigation::Redirect { from: route, to: Route::Home },
        };

        log_navigation(path, navigation.page().path(), matches!(navigation, Navigation::Redirect { .. }));
        navigation
    }

    /// Navigation bar entries for a session
    pub fn nav_items(&self, session: &Session) -> Vec<NavItem> {
        let mut items = vec![
            NavItem::link(Route::Home),
            NavItem { title: Route::AboutUs.title(), route: None },
            NavItem::link(Route::Events),
            NavItem::link(Route::Programs),
            NavItem::link(Route::Portfolio),
            NavItem::link(Route::Community),
            NavItem::link(Route::Register),
        ];

        if session.authenticated {
            if let Some(dashboard) = Route::dashboard_for(session.role).filter(|r| self.is_enabled(*r)) {
                items.push(NavItem { title: "Dashboard", route: Some(dashboard) });
            }
            items.push(NavItem { title: LOGOUT_TITLE, route: None });
        } else {
            items.push(NavItem::link(Route::Login));
        }

        items
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(&FeaturesConfig::default())
    }
}
