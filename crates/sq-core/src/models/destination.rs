use serde::Serialize;

/// Fixed navigation exit points, relative to the site origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    StudentDashboard,
    ParentDashboard,
    TeacherDashboard,
    Index,
    AvatarSelection,
    SignIn,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "dashboards/student-dashboard.html",
            Self::ParentDashboard => "dashboards/parent-dashboard.html",
            Self::TeacherDashboard => "dashboards/teacher-dashboard.html",
            Self::Index => "index.html",
            Self::AvatarSelection => "avatar-selection.html",
            Self::SignIn => "auth/auth.html",
        }
    }

    /// Absolute URL under `origin` (trailing slash tolerated)
    pub fn url(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.path())
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Self::StudentDashboard | Self::ParentDashboard | Self::TeacherDashboard
        )
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
