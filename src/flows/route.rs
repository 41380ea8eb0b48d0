use std::fmt;

/// Where the UI should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Remain on the current page.
    Stay,
    Login,
    Home,
    NoTeam,
    TeamList,
    TeamDetail(i64),
    Coaching(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Stay => String::new(),
            Route::Login => "/login".to_string(),
            Route::Home => "/".to_string(),
            Route::NoTeam => "/team/none".to_string(),
            Route::TeamList => "/teams".to_string(),
            Route::TeamDetail(id) => format!("/teams/{}", id),
            Route::Coaching(game_id) => format!("/coaching/{}", game_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
