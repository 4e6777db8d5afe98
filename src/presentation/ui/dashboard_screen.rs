//! Protected dashboard.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use super::layout::{card, centered};
use crate::application::dto::ProfileView;
use crate::domain::entities::UserProfile;
use crate::domain::{SessionSnapshot, SessionStatus};

/// Profile fetch progress, owned by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Profile available.
    Loaded(Box<ProfileView>),
    /// Request failed with message.
    Failed(String),
}

/// Dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    profile: ProfileState,
    date_format: String,
}

impl DashboardState {
    /// Creates empty state.
    #[must_use]
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            profile: ProfileState::Idle,
            date_format: date_format.into(),
        }
    }

    /// Returns profile progress.
    #[must_use]
    pub const fn profile(&self) -> &ProfileState {
        &self.profile
    }

    /// Returns whether a profile fetch should start for this status.
    /// A failed load is retried.
    #[must_use]
    pub fn needs_fetch(&self, status: SessionStatus) -> bool {
        status.is_authenticated()
            && matches!(self.profile, ProfileState::Idle | ProfileState::Failed(_))
    }

    /// Marks fetch as started.
    pub fn begin_fetch(&mut self) {
        self.profile = ProfileState::Loading;
    }

    /// Stores fetched profile.
    pub fn set_profile(&mut self, profile: &UserProfile) {
        self.profile = ProfileState::Loaded(Box::new(ProfileView::from_profile(
            profile,
            &self.date_format,
        )));
    }

    /// Stores fetch failure.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.profile = ProfileState::Failed(message.into());
    }

    /// Drops loaded data.
    pub fn clear(&mut self) {
        self.profile = ProfileState::Idle;
    }
}

/// Dashboard screen; what it shows depends on the session status.
pub struct DashboardScreen<'a> {
    session: &'a SessionSnapshot,
}

impl<'a> DashboardScreen<'a> {
    /// Creates screen for the given session snapshot.
    #[must_use]
    pub const fn new(session: &'a SessionSnapshot) -> Self {
        Self { session }
    }
}

impl StatefulWidget for DashboardScreen<'_> {
    type State = DashboardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        match self.session.status {
            SessionStatus::Verifying => render_loading(area, buf),
            SessionStatus::Unauthenticated => render_access_denied(area, buf),
            SessionStatus::Error => render_error(
                self.session.error().unwrap_or("Something went wrong."),
                "Press Enter to dismiss.",
                area,
                buf,
            ),
            SessionStatus::Authenticated => match &state.profile {
                ProfileState::Idle | ProfileState::Loading => render_loading(area, buf),
                ProfileState::Failed(message) => render_error(message, "", area, buf),
                ProfileState::Loaded(view) => render_profile(view, area, buf),
            },
        }
    }
}

fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn value_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn render_loading(area: Rect, buf: &mut Buffer) {
    let content_area = centered(area, 50, 5);
    let block = card("Dashboard", Color::DarkGray);
    let inner = block.inner(content_area);
    block.render(content_area, buf);

    Paragraph::new(vec![
        Line::from(Span::styled(
            "Loading your dashboard...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled("░".repeat(30), Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .render(inner, buf);
}

fn render_access_denied(area: Rect, buf: &mut Buffer) {
    let content_area = centered(area, 50, 7);
    let block = card("Access Denied", Color::Blue);
    let inner = block.inner(content_area);
    block.render(content_area, buf);

    Paragraph::new(vec![
        Line::from(Span::styled(
            "You must be signed in to view this page.",
            label_style(),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("F3", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to go to Sign In."),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}

fn render_error(message: &str, hint: &str, area: Rect, buf: &mut Buffer) {
    let content_area = centered(area, 56, 7);
    let block = card("An Error Occurred", Color::Red);
    let inner = block.inner(content_area);
    block.render(content_area, buf);

    let mut lines = vec![Line::from(Span::raw(message.to_string()))];
    if !hint.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn info_row(label: &str, value: &str, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), label_style()),
        Span::styled(value.to_string(), value_style),
    ])
}

fn flag_style(ok: bool) -> Style {
    let color = if ok { Color::Green } else { Color::Red };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_card(title: &str, rows: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let block = card(title, Color::Cyan);
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(rows).render(inner, buf);
}

fn render_profile(view: &ProfileView, area: Rect, buf: &mut Buffer) {
    let [header, grid] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", view.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here is a summary of your profile and account details.",
            label_style(),
        )),
    ])
    .render(header, buf);

    let [top, bottom] =
        Layout::vertical([Constraint::Length(6), Constraint::Length(5)]).areas(grid);
    let columns = [Constraint::Fill(2), Constraint::Fill(1)];
    let [profile_area, account_area] = Layout::horizontal(columns).areas(top);
    let [details_area, dates_area] = Layout::horizontal(columns).areas(bottom);

    render_card(
        "Profile Information",
        vec![
            info_row("Name", &view.name, value_style()),
            info_row("Email", &view.email, value_style()),
            info_row("Phone", &view.phone, value_style()),
            info_row("Address", &view.address, value_style()),
        ],
        profile_area,
        buf,
    );

    render_card(
        "Account Status",
        vec![
            info_row("Role", &view.role, Style::default().fg(Color::Magenta)),
            info_row("Status", view.status, flag_style(view.is_active)),
            info_row("Verified", view.verified, flag_style(view.is_verified)),
        ],
        account_area,
        buf,
    );

    render_card(
        "Professional & Academic Details",
        vec![
            info_row("Occupation", &view.occupation, value_style()),
            info_row("Institution", &view.institution, value_style()),
            info_row("Year", &view.year, value_style()),
        ],
        details_area,
        buf,
    );

    render_card(
        "Important Dates",
        vec![
            info_row("Date Joined", &view.joined, value_style()),
            info_row("Last Updated", &view.updated, value_style()),
        ],
        dates_area,
        buf,
    );
}
