#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Jobs,
    Companies,
}

impl Route {
    /// `/` and `/companies`; every other path matches nothing
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" | "" => Some(Route::Jobs),
            "/companies" => Some(Route::Companies),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Jobs => "/",
            Route::Companies => "/companies",
        }
    }
}
