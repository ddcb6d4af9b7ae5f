//! Page routing
//!
//! The album is a single page; any unknown path redirects to it.

/// A named page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub title: Option<&'static str>,
}

pub const ALBUM_VIEW: Route = Route {
    path: "/",
    name: "album-view",
    title: Some("Album"),
};

pub const ROUTES: &[Route] = &[ALBUM_VIEW];

/// Outcome of matching a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Route),
    Redirect { to: Route },
}

impl RouteMatch {
    /// The page that ends up being shown
    pub fn route(&self) -> Route {
        match *self {
            RouteMatch::Page(route) => route,
            RouteMatch::Redirect { to, .. } => to,
        }
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn resolve_route(path: &str) -> RouteMatch {
    let path = normalize(path);
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| RouteMatch::Page(*route))
        .unwrap_or(RouteMatch::Redirect { to: ALBUM_VIEW })
}

/// Document title for a page: `"{title} - {app_name}"`
pub fn page_title(route: &Route, app_name: &str) -> String {
    match route.title {
        Some(title) => format!("{} - {}", title, app_name),
        None => app_name.to_string(),
    }
}
