/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Account registration
    Signup,
    /// Resource counts
    Dashboard,
    /// Conversations and messages
    Chat,
    /// One widget's settings and embed URL
    WidgetPreview,
}

impl AppView {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Signup => "/auth/signup",
            Self::Dashboard => "/main/dashboard",
            Self::Chat => "/main/chat",
            Self::WidgetPreview => "/main/widgets",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [
            Self::Login,
            Self::Signup,
            Self::Dashboard,
            Self::Chat,
            Self::WidgetPreview,
        ]
        .into_iter()
        .find(|view| view.path() == path.trim_end_matches('/'))
    }
}
