#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Love,
}

impl Route {
    /// Parse a location path. Query and fragment are ignored, as is one
    /// trailing slash; anything else is not a route.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" | "" => Some(Route::Home),
            "/love" => Some(Route::Love),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Love => "/love",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Action Items",
            Route::Love => "我爱你，哥哥",
        }
    }
}
