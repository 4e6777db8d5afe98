//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::application::services::{
    SessionManager, VerifyOutcome, validate_sign_in, validate_sign_up,
};
use crate::application::use_cases::FetchProfileUseCase;
use crate::domain::entities::UserProfile;
use crate::domain::errors::{ProfileError, SessionError, SignupError};
use crate::domain::ports::AuthApiPort;
use crate::domain::{CancellationToken, SessionSnapshot, SessionStatus};
use crate::presentation::events::{EventHandler, EventResult, NavCommand};
use crate::presentation::ui::{
    DashboardScreen, DashboardState, FormAction, HomeScreen, Route, SignInScreen, SignInState,
    SignUpScreen, SignUpState,
};
use crate::presentation::widgets::{NavBar, StatusBar, StatusLevel};

#[derive(Debug)]
enum Action {
    Verified(VerifyOutcome),
    LoggedIn(Result<(), SessionError>),
    SignedUp(Result<(), SignupError>),
    LoggedOut(Result<(), SessionError>),
    ProfileLoaded {
        generation: u64,
        result: Result<UserProfile, ProfileError>,
    },
}

/// Terminal application: routes, screens and the session they observe.
pub struct App {
    session: SessionManager,
    session_rx: watch::Receiver<SessionSnapshot>,
    snapshot: SessionSnapshot,
    fetch_profile: FetchProfileUseCase,
    route: Route,
    sign_in: SignInState,
    sign_up: SignUpState,
    dashboard: DashboardState,
    server_label: String,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    verify_token: CancellationToken,
    request_in_flight: bool,
    profile_generation: u64,
    running: bool,
}

impl App {
    /// Creates app backed by the given account API.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApiPort>, date_format: impl Into<String>) -> Self {
        let session = SessionManager::new(api.clone());
        let fetch_profile = FetchProfileUseCase::new(api, session.clone());
        let session_rx = session.subscribe();
        let snapshot = session_rx.borrow().clone();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            session,
            session_rx,
            snapshot,
            fetch_profile,
            route: Route::default(),
            sign_in: SignInState::new(),
            sign_up: SignUpState::new(),
            dashboard: DashboardState::new(date_format),
            server_label: String::new(),
            action_tx,
            action_rx,
            verify_token: CancellationToken::new(),
            request_in_flight: false,
            profile_generation: 0,
            running: true,
        }
    }

    /// Sets the server shown in the status bar.
    #[must_use]
    pub fn with_server_label(mut self, label: impl Into<String>) -> Self {
        self.server_label = label.into();
        self
    }

    /// Returns current route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Runs until the user quits. Verifies the session on startup.
    ///
    /// # Errors
    /// Returns error if terminal IO fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_verify();

        let result = self.run_event_loop(terminal).await;

        self.shutdown();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Ok(()) = self.session_rx.changed() => {
                    self.sync_session();
                }

                event = terminal_events.next() => match event {
                    Some(Ok(event)) => {
                        if self.handle_terminal_event(&event) == EventResult::Exit {
                            self.running = false;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => self.running = false,
                },
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn shutdown(&self) {
        debug!("Cancelling pending session verification");
        self.verify_token.cancel();
    }

    fn start_verify(&self) {
        let session = self.session.clone();
        let token = self.verify_token.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = session.verify(&token).await;
            let _ = tx.send(Action::Verified(outcome));
        });
    }

    fn sync_session(&mut self) {
        let previous = self.snapshot.status;
        self.snapshot = self.session_rx.borrow_and_update().clone();
        let status = self.snapshot.status;

        if status == previous {
            return;
        }
        debug!(from = %previous, to = %status, "Session status changed");

        match status {
            SessionStatus::Authenticated => {
                self.dashboard.clear();
                self.start_profile_fetch();
            }
            SessionStatus::Unauthenticated | SessionStatus::Error => self.dashboard.clear(),
            SessionStatus::Verifying => {}
        }
    }

    /// Status the forms see; a spawned request counts as busy before the
    /// manager publishes `Verifying`.
    fn form_status(&self) -> SessionStatus {
        if self.request_in_flight {
            SessionStatus::Verifying
        } else {
            self.snapshot.status
        }
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if let Some(command) = EventHandler::nav_command(&key) {
            self.handle_nav(command);
            return EventResult::Consumed;
        }

        match self.route {
            Route::Home | Route::Dashboard => {
                if EventHandler::is_submit_event(&key) && self.snapshot.status == SessionStatus::Error
                {
                    self.session.clear_error();
                    return EventResult::Consumed;
                }
                EventResult::Continue
            }
            Route::SignIn => {
                let action = self.sign_in.handle_key(key, self.form_status());
                self.handle_form_action(action);
                EventResult::Consumed
            }
            Route::SignUp => {
                let action = self.sign_up.handle_key(key, self.form_status());
                self.handle_form_action(action);
                EventResult::Consumed
            }
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Edited => {
                if self.snapshot.error.is_some() {
                    self.session.clear_error();
                }
            }
            FormAction::Submit => match self.route {
                Route::SignIn => self.submit_sign_in(),
                Route::SignUp => self.submit_sign_up(),
                Route::Home | Route::Dashboard => {}
            },
            FormAction::Moved | FormAction::None => {}
        }
    }

    fn handle_nav(&mut self, command: NavCommand) {
        if command == NavCommand::Logout {
            if self.snapshot.status.is_authenticated() && !self.request_in_flight {
                self.start_logout();
            }
            return;
        }

        let Some(route) = Route::for_command(command, self.snapshot.status) else {
            debug!(?command, status = %self.snapshot.status, "Navigation unavailable");
            return;
        };

        if route != self.route {
            debug!(from = %self.route, to = %route, "Navigating");
            self.route = route;
        }

        if route == Route::Dashboard && self.dashboard.needs_fetch(self.snapshot.status) {
            self.start_profile_fetch();
        }
    }

    fn submit_sign_in(&mut self) {
        let credentials = match validate_sign_in(&self.sign_in.form()) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.sign_in.set_validation_error(e.to_string());
                return;
            }
        };

        info!(email = %credentials.email, "Submitting sign-in");
        self.request_in_flight = true;
        let session = self.session.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = session.login(credentials).await;
            let _ = tx.send(Action::LoggedIn(result));
        });
    }

    fn submit_sign_up(&mut self) {
        let data = match validate_sign_up(&self.sign_up.form()) {
            Ok(data) => data,
            Err(e) => {
                self.sign_up.set_validation_error(e.to_string());
                return;
            }
        };

        info!(email = %data.email, "Submitting sign-up");
        self.request_in_flight = true;
        let session = self.session.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = session.signup(data).await;
            let _ = tx.send(Action::SignedUp(result));
        });
    }

    fn start_logout(&mut self) {
        info!("Logging out");
        self.request_in_flight = true;
        let session = self.session.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = session.logout().await;
            let _ = tx.send(Action::LoggedOut(result));
        });
    }

    fn start_profile_fetch(&mut self) {
        self.profile_generation += 1;
        let generation = self.profile_generation;
        self.dashboard.begin_fetch();

        let use_case = self.fetch_profile.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute().await;
            let _ = tx.send(Action::ProfileLoaded { generation, result });
        });
    }

    fn handle_action(&mut self, action: Action) {
        // Pick up any transition published before the task reported back.
        self.sync_session();

        match action {
            Action::Verified(outcome) => {
                debug!(?outcome, "Startup verification finished");
            }
            Action::LoggedIn(result) => {
                self.request_in_flight = false;
                match result {
                    Ok(()) => {
                        self.sign_in.reset();
                        self.route = Route::Dashboard;
                    }
                    Err(e) if e.is_recoverable() => warn!(error = %e, "Sign-in rejected"),
                    Err(e) => error!(error = %e, "Sign-in failed"),
                }
            }
            Action::SignedUp(result) => {
                self.request_in_flight = false;
                match result {
                    Ok(()) => {
                        self.sign_up.reset();
                        self.route = Route::Dashboard;
                    }
                    Err(e) if e.error.is_recoverable() => {
                        warn!(phase = %e.phase, error = %e, "Sign-up rejected");
                    }
                    Err(e) => error!(phase = %e.phase, error = %e, "Sign-up failed"),
                }
            }
            Action::LoggedOut(result) => {
                self.request_in_flight = false;
                if let Err(e) = result {
                    error!(error = %e, "Logout failed");
                }
            }
            Action::ProfileLoaded { generation, result } => {
                if generation != self.profile_generation {
                    debug!(generation, "Discarding stale profile response");
                    return;
                }
                match result {
                    Ok(profile) => self.dashboard.set_profile(&profile),
                    Err(ProfileError::NotAuthenticated) => self.dashboard.clear(),
                    Err(e) => self.dashboard.set_error(e.to_string()),
                }
            }
        }
    }

    fn status_bar(&self) -> StatusBar {
        let hints = match self.route {
            Route::Home | Route::Dashboard => " F1 Home · F2 Dashboard · Esc Quit",
            Route::SignIn | Route::SignUp => {
                " Tab/↓ Next · Shift+Tab/↑ Previous · Enter Submit · Esc Quit"
            }
        };

        let mut bar = StatusBar::new()
            .left(hints)
            .right(format!("{} ", self.server_label))
            .level(StatusLevel::from(self.snapshot.status));

        if self.snapshot.status.is_authenticated()
            && let Some(message) = self.snapshot.error()
        {
            bar = bar.center(message).level(StatusLevel::Error);
        }
        bar
    }

    fn render(&mut self, frame: &mut Frame) {
        let [nav_area, body, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            NavBar::new(crate::NAME)
                .status(self.snapshot.status)
                .active(self.route),
            nav_area,
        );

        match self.route {
            Route::Home => frame.render_widget(&HomeScreen::new(self.snapshot.status), body),
            Route::SignIn => frame.render_stateful_widget(
                SignInScreen::new(&self.snapshot),
                body,
                &mut self.sign_in,
            ),
            Route::SignUp => frame.render_stateful_widget(
                SignUpScreen::new(&self.snapshot),
                body,
                &mut self.sign_up,
            ),
            Route::Dashboard => frame.render_stateful_widget(
                DashboardScreen::new(&self.snapshot),
                body,
                &mut self.dashboard,
            ),
        }

        frame.render_widget(&self.status_bar(), status_area);
    }
}
