use crate::domain::SessionStatus;
use crate::presentation::events::NavCommand;
use crate::presentation::ui::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait SessionStatusExt {
    fn indicator(self) -> &'static str;
}

impl SessionStatusExt for SessionStatus {
    fn indicator(self) -> &'static str {
        match self {
            Self::Authenticated => "●",
            Self::Verifying => "◐",
            Self::Unauthenticated | Self::Error => "○",
        }
    }
}

pub struct NavBarStyle {
    pub brand: Style,
    pub link: Style,
    pub active_link: Style,
    pub key_hint: Style,
    pub logout: Style,
    pub separator: Style,
    pub status_authenticated: Style,
    pub status_unauthenticated: Style,
    pub status_verifying: Style,
    pub status_error: Style,
}

impl Default for NavBarStyle {
    fn default() -> Self {
        Self {
            brand: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::White),
            active_link: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            key_hint: Style::default().fg(Color::DarkGray),
            logout: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),
            status_authenticated: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_unauthenticated: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_verifying: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top navigation bar. Auth actions depend on the session status.
pub struct NavBar<'a> {
    brand: &'a str,
    status: SessionStatus,
    active: Route,
    style: NavBarStyle,
}

impl<'a> NavBar<'a> {
    #[must_use]
    pub fn new(brand: &'a str) -> Self {
        Self {
            brand,
            status: SessionStatus::default(),
            active: Route::default(),
            style: NavBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn active(mut self, route: Route) -> Self {
        self.active = route;
        self
    }

    /// Links shown on the right, in display order.
    #[must_use]
    pub fn auth_actions(status: SessionStatus) -> &'static [NavCommand] {
        match status {
            SessionStatus::Unauthenticated => &[NavCommand::SignUp, NavCommand::SignIn],
            SessionStatus::Authenticated => &[NavCommand::Logout],
            SessionStatus::Verifying | SessionStatus::Error => &[],
        }
    }

    const fn status_style(&self) -> Style {
        match self.status {
            SessionStatus::Authenticated => self.style.status_authenticated,
            SessionStatus::Unauthenticated => self.style.status_unauthenticated,
            SessionStatus::Verifying => self.style.status_verifying,
            SessionStatus::Error => self.style.status_error,
        }
    }

    fn link(&self, command: NavCommand, label: &'static str, route: Option<Route>) -> Vec<Span<'static>> {
        let style = if command == NavCommand::Logout {
            self.style.logout
        } else if route == Some(self.active) {
            self.style.active_link
        } else {
            self.style.link
        };

        vec![
            Span::styled(format!("[{}] ", command.key_label()), self.style.key_hint),
            Span::styled(label, style),
            Span::raw("  "),
        ]
    }

    fn left_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(format!(" {} ", self.brand.to_uppercase()), self.style.brand),
            Span::raw("  "),
        ];
        spans.extend(self.link(NavCommand::Home, "Home", Some(Route::Home)));
        spans.extend(self.link(NavCommand::Dashboard, "Private", Some(Route::Dashboard)));
        spans
    }

    fn right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for command in Self::auth_actions(self.status) {
            let (label, route) = match command {
                NavCommand::SignUp => ("Sign Up", Some(Route::SignUp)),
                NavCommand::SignIn => ("Sign In", Some(Route::SignIn)),
                NavCommand::Logout => ("Logout", None),
                NavCommand::Home | NavCommand::Dashboard => continue,
            };
            spans.extend(self.link(*command, label, route));
        }
        spans.push(Span::styled(
            format!(" {} {} ", self.status.indicator(), self.status.display_text()),
            self.status_style(),
        ));
        spans
    }
}

fn spans_width(spans: &[Span<'_>]) -> u16 {
    let width: usize = spans.iter().map(|s| s.content.width()).sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.style.separator);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let left = self.left_spans();
        let left_width = spans_width(&left).min(inner.width);
        Paragraph::new(Line::from(left)).render(
            Rect::new(inner.x, inner.y, left_width, 1),
            buf,
        );

        let right = self.right_spans();
        let right_width = spans_width(&right);
        if right_width < inner.width.saturating_sub(left_width) {
            let right_x = inner.right().saturating_sub(right_width);
            Paragraph::new(Line::from(right)).render(
                Rect::new(right_x, inner.y, right_width, 1),
                buf,
            );
        }
    }
}
