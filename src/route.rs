//! Hash Routes
//!
//! `#/board/3`, `#/thread/7`, `#/user/2`, `#/profile`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Board(i64),
    Thread(i64),
    User(i64),
    EditProfile,
    NotFound,
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(""), None, None) => Route::Home,
            (Some("profile"), None, None) => Route::EditProfile,
            (Some(kind), Some(id), None) => match (kind, id.parse::<i64>()) {
                ("board", Ok(id)) => Route::Board(id),
                ("thread", Ok(id)) => Route::Thread(id),
                ("user", Ok(id)) => Route::User(id),
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Board(id) => format!("#/board/{}", id),
            Route::Thread(id) => format!("#/thread/{}", id),
            Route::User(id) => format!("#/user/{}", id),
            Route::EditProfile => "#/profile".to_string(),
        }
    }
}

/// One stay on a page. Returning to the same route later starts a new visit,
/// so answers requested during the earlier one no longer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub route: Route,
    generation: u64,
}

impl Visit {
    pub fn first(route: Route) -> Self {
        Self { route, generation: 0 }
    }

    pub fn next(self, route: Route) -> Self {
        Self {
            route,
            generation: self.generation.wrapping_add(1),
        }
    }
}

/// Route of the current page
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}
