//! Application model.
//!
//! Owns the lifecycle store and the transient screen state. Key handling is
//! synchronous; anything that needs the backend comes back out of
//! [`App::handle_key`] as a [`Command`] for the event loop to run.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mc_01_lifecycle::{AppStore, Clock, LifecycleApi, MutationOutcome, SystemClock};
use mc_02_backend::{
    AccountError, AccountService, IdProofFile, ProfileDraft, ProfileRecord, ProfileSaveResult,
};
use shared_types::{RequestDecision, RequestId, User};
use tracing::{debug, info, warn};

use super::auth_form::{AuthForm, AuthMode, AuthRequest};
use super::dashboard::{dispatch_decision, Dispatch, DashboardView};
use super::profile_form::ProfileForm;
use super::sessions::cancel_if_offered;
use super::sidebar::route_for_hotkey;
use super::Route;
use crate::error::AppError;

/// Alert shown after a successful profile submit.
pub const PROFILE_COMPLETED: &str = "Profile completed successfully! You are now a verified \
                                     member and can start accepting client requests.";

/// Alert shown when the profile is submitted with nobody signed in.
pub const SIGN_IN_TO_SAVE: &str = "Sign in to save your profile.";

/// Alert shown after a successful sign-up.
pub const ACCOUNT_CREATED: &str = "Account created. Sign in to continue.";

/// Backend work requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in or sign up.
    Authenticate(AuthRequest),
    /// Fetch the stored row to prefill the profile form.
    LoadProfile {
        /// Owner of the row.
        user_id: String,
    },
    /// Persist the profile row.
    SaveProfile {
        /// Owner of the row.
        user_id: String,
        /// Values to write.
        draft: ProfileDraft,
    },
}

/// Application model.
pub struct App<C: Clock = SystemClock> {
    /// Current screen.
    pub route: Route,
    /// The lifecycle store.
    pub store: AppStore<C>,
    /// Auth screen buffers.
    pub auth_form: AuthForm,
    /// Profile screen buffers.
    pub profile_form: ProfileForm,
    /// Blocking alert; swallows the next key press.
    pub alert: Option<String>,
    /// Highlighted row on the dashboard.
    pub selected_request: usize,
    /// Highlighted card on the sessions screen.
    pub selected_session: usize,
    /// Request shown in the detail modal.
    pub detail: Option<RequestId>,
    /// A command is in flight.
    pub busy: bool,
    quit: bool,
}

impl<C: Clock> App<C> {
    /// App over `store`, opened at `route`.
    pub fn new(store: AppStore<C>, route: Route) -> Self {
        let mut app = Self {
            route: Route::Landing,
            store,
            auth_form: AuthForm::default(),
            profile_form: ProfileForm::default(),
            alert: None,
            selected_request: 0,
            selected_session: 0,
            detail: None,
            busy: false,
            quit: false,
        };
        app.navigate(route);
        app
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Switch screens.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "Navigate");
        if route == Route::Profile {
            self.profile_form = ProfileForm::from_user(self.store.state().user());
        }
        self.route = route;
        self.detail = None;
        self.selected_request = 0;
        self.selected_session = 0;
    }

    /// Raise a blocking alert.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(%message, "Alert");
        self.alert = Some(message);
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return None;
        }
        if self.alert.take().is_some() {
            return None;
        }
        if self.busy {
            return None;
        }

        let from = self.route;
        let command = self.dispatch_key(key);
        if command.is_none() && from != Route::Profile && self.route == Route::Profile {
            return self.request_profile_load();
        }
        command
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Option<Command> {
        match self.route {
            Route::Landing => {
                match key.code {
                    KeyCode::Enter => self.navigate(Route::Auth),
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    _ => {}
                }
                None
            }
            Route::Auth => self.handle_auth_key(key),
            Route::Profile => self.handle_profile_key(key),
            Route::Dashboard => {
                self.handle_dashboard_key(key);
                None
            }
            Route::ActiveSessions => {
                self.handle_sessions_key(key);
                None
            }
            Route::FindMaids => {
                self.handle_sidebar_key(key);
                None
            }
        }
    }

    /// Sidebar hotkeys and quit. Returns true when the key was used.
    fn handle_sidebar_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                true
            }
            KeyCode::Char(c) => match route_for_hotkey(c) {
                Some(route) => {
                    self.navigate(route);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc => self.navigate(Route::Landing),
            KeyCode::F(2) => self.auth_form.toggle_mode(),
            KeyCode::Tab | KeyCode::Down => self.auth_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.auth_form.focus_prev(),
            KeyCode::Backspace => self.auth_form.backspace(),
            KeyCode::Char(c) => self.auth_form.insert(c),
            KeyCode::Enter if self.auth_form.is_ready() => {
                let request = self.auth_form.request();
                self.auth_form.clear_secret();
                self.busy = true;
                return Some(Command::Authenticate(request));
            }
            KeyCode::Enter => debug!("Auth submit ignored: required fields empty"),
            _ => {}
        }
        None
    }

    fn handle_profile_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc => self.navigate(Route::Dashboard),
            KeyCode::Tab | KeyCode::Down => self.profile_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.profile_form.focus_prev(),
            KeyCode::Backspace => self.profile_form.backspace(),
            KeyCode::Char(c) => self.profile_form.insert(c),
            KeyCode::Enter if self.profile_form.is_valid() => return self.submit_profile(),
            KeyCode::Enter => debug!("Profile submit ignored: form incomplete"),
            _ => {}
        }
        None
    }

    fn request_profile_load(&mut self) -> Option<Command> {
        let user_id = self.store.state().user()?.id.clone();
        self.busy = true;
        Some(Command::LoadProfile { user_id })
    }

    fn submit_profile(&mut self) -> Option<Command> {
        let outcome = self.store.update_profile(self.profile_form.to_update());
        debug!(?outcome, "Profile submitted");
        if outcome == MutationOutcome::NotFound {
            self.show_alert(SIGN_IN_TO_SAVE);
            return None;
        }
        self.show_alert(PROFILE_COMPLETED);

        let user_id = self.store.state().user().map(|u| u.id.clone())?;
        self.busy = true;
        Some(Command::SaveProfile {
            user_id,
            draft: self.profile_form.to_draft(),
        })
    }

    fn pending_ids(&self) -> Vec<RequestId> {
        DashboardView::build(self.store.state(), self.store.config())
            .rows
            .iter()
            .map(|row| row.request.id.clone())
            .collect()
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if let Some(id) = self.detail.clone() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('x') => self.detail = None,
                KeyCode::Char('a') => self.decide(&id, RequestDecision::Accept),
                KeyCode::Char('r') => self.decide(&id, RequestDecision::Reject),
                _ => {}
            }
            return;
        }

        if self.handle_sidebar_key(key) {
            return;
        }

        let ids = self.pending_ids();
        let selected = ids.get(self.selected_request).cloned();
        match key.code {
            KeyCode::Up => self.selected_request = self.selected_request.saturating_sub(1),
            KeyCode::Down if self.selected_request + 1 < ids.len() => {
                self.selected_request += 1
            }
            KeyCode::Enter | KeyCode::Char('i') => self.detail = selected,
            KeyCode::Char('a') => {
                if let Some(id) = selected {
                    self.decide(&id, RequestDecision::Accept);
                }
            }
            KeyCode::Char('r') => {
                if let Some(id) = selected {
                    self.decide(&id, RequestDecision::Reject);
                }
            }
            _ => {}
        }
    }

    fn decide(&mut self, id: &str, decision: RequestDecision) {
        let config = self.store.config().clone();
        match dispatch_decision(&mut self.store, &config, id, decision) {
            Dispatch::Blocked(denial) => self.show_alert(denial.to_string()),
            Dispatch::Sent(_) => {
                self.detail = None;
                let remaining = self.pending_ids().len();
                self.selected_request = self.selected_request.min(remaining.saturating_sub(1));
            }
        }
    }

    fn handle_sessions_key(&mut self, key: KeyEvent) {
        if self.handle_sidebar_key(key) {
            return;
        }
        let count = self.store.state().active_sessions().len();
        match key.code {
            KeyCode::Up => self.selected_session = self.selected_session.saturating_sub(1),
            KeyCode::Down if self.selected_session + 1 < count => self.selected_session += 1,
            KeyCode::Char('c') => {
                let id = self
                    .store
                    .state()
                    .active_sessions()
                    .get(self.selected_session)
                    .map(|s| s.id.clone());
                if let Some(id) = id {
                    cancel_if_offered(&mut self.store, &id);
                }
            }
            _ => {}
        }
    }

    /// Sign-in finished.
    pub fn signed_in(&mut self, user: User) {
        self.store.set_user(Some(user));
        self.auth_form = AuthForm::default();
        self.navigate(Route::Dashboard);
    }

    /// Sign-up finished; the worker signs in next.
    pub fn signed_up(&mut self) {
        if self.auth_form.mode == AuthMode::SignUp {
            self.auth_form.toggle_mode();
        }
        self.auth_form.id_proof.clear();
        self.show_alert(ACCOUNT_CREATED);
    }

    /// Stored row arrived. Ignored once the worker has left the form.
    pub fn profile_loaded(&mut self, record: Option<ProfileRecord>) {
        match record {
            Some(record) if self.route == Route::Profile => {
                self.profile_form.fill_from_record(&record);
            }
            Some(_) => debug!(route = %self.route, "Stored profile arrived off-screen"),
            None => debug!("No stored profile to prefill"),
        }
    }

    /// Profile row write finished. Success was already announced on submit.
    pub fn profile_saved(&mut self, result: ProfileSaveResult) {
        if result.success {
            debug!(message = %result.message, "Profile persisted");
        } else {
            self.show_alert(AccountError::SaveProfile(result.message).to_string());
        }
    }

    /// Run a command against the backend and fold the result back in.
    pub async fn execute(&mut self, service: &AccountService, command: Command) {
        match command {
            Command::Authenticate(AuthRequest::SignIn(credentials)) => {
                match service.sign_in(&credentials).await {
                    Ok(user) => self.signed_in(user),
                    Err(e) => self.show_alert(e.to_string()),
                }
            }
            Command::Authenticate(AuthRequest::SignUp {
                credentials,
                id_proof,
            }) => {
                let file = match id_proof {
                    Some(path) => match read_id_proof(&path).await {
                        Ok(file) => Some(file),
                        Err(e) => {
                            warn!(error = %e, "ID proof unreadable");
                            self.show_alert(e.to_string());
                            self.busy = false;
                            return;
                        }
                    },
                    None => None,
                };
                match service.sign_up(&credentials, file).await {
                    Ok(_) => self.signed_up(),
                    Err(e) => self.show_alert(e.to_string()),
                }
            }
            Command::LoadProfile { user_id } => {
                let record = service.load_profile(&user_id).await;
                self.profile_loaded(record);
            }
            Command::SaveProfile { user_id, draft } => {
                let result = service.save_profile(&user_id, draft).await;
                self.profile_saved(result);
            }
        }
        self.busy = false;
    }
}

/// Load an identity-proof document from disk.
pub async fn read_id_proof(path: &Path) -> Result<IdProofFile, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| AppError::IdProof {
            path: PathBuf::from(path),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(IdProofFile {
        content_type: content_type_for(&file_name).to_string(),
        file_name,
        bytes,
    })
}

/// MIME type by extension. Images and PDF are what the form accepts.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
