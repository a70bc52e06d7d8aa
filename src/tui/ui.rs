use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::types::User;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = create_layout(frame.area());

    render_header(app, frame, chunks[0]);
    render_cards(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);
}

/// Standard 3-section layout: header, main, footer
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!("Userdeck ({} users, page {})", app.users.len(), app.page);
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    if app.users.is_empty() {
        let message = if app.loading {
            "Fetching users..."
        } else {
            "No users loaded yet. Scroll down to fetch a page."
        };
        let empty_msg = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Users"))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = app.users.iter().map(user_card).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Users"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn user_card(user: &User) -> ListItem<'_> {
    let detail = Style::default().fg(Color::Gray);
    let dim = Style::default().fg(Color::DarkGray);

    ListItem::new(vec![
        Line::from(Span::styled(
            user.full_name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("  {}", user.email), detail)),
        Line::from(Span::styled(format!("  {}", user.born()), detail)),
        Line::from(Span::styled(format!("  {}", user.phone), detail)),
        Line::from(Span::styled(format!("  {}", user.login.username), detail)),
        Line::from(Span::styled(format!("  {}", user.picture.medium), dim)),
        Line::from(""),
    ])
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let (text, style) = if app.loading {
        let spinner = SPINNER[app.tick % SPINNER.len()];
        (
            format!("{spinner} Loading page {}...", app.page),
            Style::default().fg(Color::Cyan),
        )
    } else if let Some(status) = &app.status {
        (
            format!("{status} (r to retry)"),
            Style::default().fg(Color::Red),
        )
    } else {
        (
            "j/k: Scroll | PgUp/PgDn: Page | G: Bottom | q: Quit".to_string(),
            Style::default().fg(Color::Gray),
        )
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}
