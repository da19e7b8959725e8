use std::sync::Arc;

use uuid::Uuid;

use crate::client::auth::AuthBridge;
use crate::client::config::Config;
use crate::client::guard::{Navigation, RouteGuard};
use crate::client::http::HttpClient;
use crate::client::session_store::SessionStore;
use crate::client::types::AppView;
use crate::client::views::{ChatScreen, Dashboard, LoginForm, SignupForm, WidgetPreview};
use crate::shared::ClientError;

/// Central application state shared across views.
pub struct AppState {
    pub config: Config,
    pub http: HttpClient,
    pub guard: RouteGuard,
    pub current_view: AppView,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub dashboard: Dashboard,
    pub chat: ChatScreen,
    pub widget_preview: Option<WidgetPreview>,
}

impl AppState {
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        Self::with_bridge(AuthBridge::new(HttpClient::new(config, sessions)))
    }

    pub fn with_bridge(bridge: AuthBridge) -> Self {
        let http = bridge.http().clone();
        Self {
            config: http.config().clone(),
            http,
            guard: RouteGuard::new(bridge),
            current_view: AppView::Login,
            login_form: LoginForm::new(),
            signup_form: SignupForm::new(),
            dashboard: Dashboard::new(),
            chat: ChatScreen::new(),
            widget_preview: None,
        }
    }

    /// Settle the guard and land on the dashboard or the login screen
    pub fn start(&mut self) -> AppView {
        self.guard.resolve();
        self.navigate(AppView::Dashboard)
    }

    /// Move to `view`, or to wherever the guard sends us instead
    pub fn navigate(&mut self, view: AppView) -> AppView {
        self.guard.resolve();
        self.current_view = match self.guard.navigate(view.path()) {
            Navigation::Proceed => view,
            Navigation::Redirect(path) => {
                tracing::debug!("[VIEW] {} needs a session, showing {}", view.path(), path);
                AppView::from_path(&path).unwrap_or(AppView::Login)
            }
        };
        self.current_view
    }

    pub async fn handle_login(&mut self) -> bool {
        if self.login_form.submit(&mut self.guard).await.is_none() {
            return false;
        }
        self.signup_form.reset();
        self.navigate(AppView::Dashboard);
        true
    }

    pub async fn handle_signup(&mut self) -> bool {
        if self.signup_form.submit(&mut self.guard).await.is_none() {
            return false;
        }
        self.login_form.reset();
        self.navigate(AppView::Dashboard);
        true
    }

    /// Sign out and drop everything loaded for the previous user
    pub async fn logout(&mut self) -> Result<AppView, ClientError> {
        let navigation = self.guard.logout().await?;
        self.login_form.reset();
        self.signup_form.reset();
        self.dashboard = Dashboard::new();
        self.chat = ChatScreen::new();
        self.widget_preview = None;

        self.current_view = match navigation {
            Navigation::Redirect(path) => AppView::from_path(&path).unwrap_or(AppView::Login),
            Navigation::Proceed => AppView::Login,
        };
        Ok(self.current_view)
    }

    /// Switch between the login and signup screens
    pub fn toggle_auth_mode(&mut self) -> AppView {
        let next = match self.current_view {
            AppView::Signup => AppView::Login,
            _ => AppView::Signup,
        };
        self.login_form.set_password("");
        self.signup_form.reset();
        self.navigate(next)
    }

    /// Load whatever the current view shows
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.current_view {
            AppView::Dashboard => self.dashboard.load(&self.http).await,
            AppView::Chat => self.chat.load_conversations(&self.http).await?,
            AppView::WidgetPreview => {
                if let Some(preview) = self.widget_preview.as_mut() {
                    preview.load(&self.http).await;
                }
            }
            AppView::Login | AppView::Signup => {}
        }
        Ok(())
    }

    pub async fn open_widget(&mut self, widget_id: Uuid) -> AppView {
        if self.navigate(AppView::WidgetPreview) != AppView::WidgetPreview {
            return self.current_view;
        }
        let mut preview = WidgetPreview::for_client(&self.http, widget_id);
        preview.load(&self.http).await;
        self.widget_preview = Some(preview);
        self.current_view
    }
}
