//! Navigation paths handed to the external router.

/// One page of the app, addressed by an opaque path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    CreateMember,
    AssignTask,
    ViewTasks,
    Member(String),
}

const MEMBER_PREFIX: &str = "/member/";

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/dashboard".to_string(),
            Self::CreateMember => "/create-member".to_string(),
            Self::AssignTask => "/assign-task".to_string(),
            Self::ViewTasks => "/view-tasks".to_string(),
            Self::Member(id) => format!("{MEMBER_PREFIX}{id}"),
        }
    }

    /// Parses a path; `None` means the not-found page.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        match path {
            "/dashboard" => Some(Self::Dashboard),
            "/create-member" => Some(Self::CreateMember),
            "/assign-task" => Some(Self::AssignTask),
            "/view-tasks" => Some(Self::ViewTasks),
            other => other
                .strip_prefix(MEMBER_PREFIX)
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::Member(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn member_route_round_trips() {
        let route = Route::Member("1700000000000".to_string());
        assert_eq!(route.path(), "/member/1700000000000");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/member/"), None);
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
    }
}
