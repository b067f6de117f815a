use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/throw")]
    Throw,
    #[at("/status")]
    Status,
    #[at("/calibration")]
    Calibration,
    #[at("/maintenance")]
    Maintenance,
    #[at("/logs")]
    Logs,
    #[at("/rewards")]
    Rewards,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Order of entries in the navigation bar.
    pub const NAV: [Self; 7] = [
        Self::Home,
        Self::Throw,
        Self::Status,
        Self::Calibration,
        Self::Maintenance,
        Self::Logs,
        Self::Rewards,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Throw => "Throw Waste",
            Self::Status => "Status",
            Self::Calibration => "Calibration",
            Self::Maintenance => "Maintenance",
            Self::Logs => "Logs",
            Self::Rewards => "Rewards",
            Self::NotFound => "Not Found",
        }
    }

    /// Whether this route reads the persisted record when shown.
    #[must_use]
    pub const fn shows_record(self) -> bool {
        matches!(self, Self::Status | Self::Logs | Self::Rewards)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn nav_routes_have_distinct_paths() {
        let paths: Vec<String> = Route::NAV.iter().map(Routable::to_path).collect();
        assert_eq!(
            paths,
            [
                "/",
                "/throw",
                "/status",
                "/calibration",
                "/maintenance",
                "/logs",
                "/rewards"
            ]
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/throw"), Some(Route::Throw));
        assert_eq!(Route::recognize("/shop"), Some(Route::NotFound));
    }

    #[test]
    fn record_pages_are_flagged() {
        assert!(Route::Logs.shows_record());
        assert!(!Route::Calibration.shows_record());
    }
}
