//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::{get_step_title, Form, Page, StepIndicator};
use crate::wizard::{image_count_label, ModalId, Severity, Wizard, LEAVE_CONFIRM_TEXT};

use super::events::Element;
use super::state::TuiState;

const BORDER: Color = Color::Cyan;

/// Render the header section (5 lines)
pub fn render_header(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(area);

    let border_width = area.width as usize;
    let inner = border_width.saturating_sub(4);

    // Title line
    let title = Line::from(vec![
        Span::styled("┌─ Hostboard ", Style::default().fg(BORDER)),
        Span::styled("─".repeat(border_width.saturating_sub(14)), Style::default().fg(BORDER)),
        Span::styled("┐", Style::default().fg(BORDER)),
    ]);
    f.render_widget(Paragraph::new(Text::from(title)).alignment(Alignment::Left), chunks[0]);

    let who = wizard
        .logged_in_as()
        .map(|email| format!(" | {}", email))
        .unwrap_or_default();
    let page_text = format!("{}{}", page_title(wizard), who);
    f.render_widget(Paragraph::new(boxed(&page_text, inner)), chunks[1]);

    // Progress line, onboarding only
    let progress = if wizard.current_page() == Page::Onboarding {
        progress_spans(wizard)
    } else {
        vec![Span::raw(String::new())]
    };
    let mut spans = vec![Span::styled("│ ", Style::default().fg(BORDER))];
    spans.extend(progress);
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    let step_text = if wizard.current_page() == Page::Onboarding {
        let step = wizard.current_step();
        format!(
            "Step {} of {}: {}",
            step,
            wizard.steps().total(),
            get_step_title(step).unwrap_or_default()
        )
    } else {
        String::new()
    };
    f.render_widget(Paragraph::new(boxed(&step_text, inner)), chunks[3]);

    f.render_widget(Paragraph::new(separator(border_width)), chunks[4]);
}

/// Render the main area: context for the screen plus its elements
pub fn render_body(f: &mut Frame, area: Rect, wizard: &Wizard, elements: &[Element], selected: Option<usize>) {
    let mut lines: Vec<Line> = context_lines(wizard).into_iter().map(Line::from).collect();
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    // Modal buttons are drawn inside the modal
    if !wizard.modals().any_open() {
        lines.extend(
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| element_line(wizard, element, selected == Some(index))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .title(page_title(wizard)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the open modal over the body
pub fn render_modal(f: &mut Frame, area: Rect, wizard: &Wizard, elements: &[Element], selected: Option<usize>) {
    let modals = wizard.modals();
    let (title, message) = if modals.is_open(ModalId::Leave) {
        ("Leave onboarding?", LEAVE_CONFIRM_TEXT.to_string())
    } else if modals.is_open(ModalId::Property) {
        let message = wizard
            .property_match()
            .map(|found| format!("Is this your property?\n\n{}\n{}", found.name, found.location))
            .unwrap_or_else(|| "Is this your property?".to_string());
        ("Property found", message)
    } else {
        return;
    };

    let popup = centered_rect(60, 50, area);
    let mut lines: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.extend(
        elements
            .iter()
            .enumerate()
            .map(|(index, element)| element_line(wizard, element, selected == Some(index))),
    );

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(title),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

/// Render the activity log (full width when toggled)
pub fn render_logs_pane(f: &mut Frame, area: Rect, state: &TuiState, scroll_offset: usize) {
    let max_log_lines = area.height.saturating_sub(2) as usize;

    let logs: Vec<ListItem> = if state.logs.is_empty() {
        vec![ListItem::new("(no activity yet)")]
    } else {
        let end = state.logs.len().saturating_sub(scroll_offset);
        let start = end.saturating_sub(max_log_lines);
        state.logs[start..end]
            .iter()
            .map(|log| ListItem::new(log.as_str()))
            .collect()
    };

    let list = List::new(logs).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title("Activity"),
    );
    f.render_widget(list, area);
}

/// Render the footer section (4 lines)
pub fn render_footer(f: &mut Frame, area: Rect, wizard: &Wizard, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(area);

    let border_width = area.width as usize;
    let inner = border_width.saturating_sub(4);

    f.render_widget(Paragraph::new(separator(border_width)), chunks[0]);

    // Toast line
    let toast_line = match wizard.toast() {
        Some(toast) => {
            let color = match toast.severity {
                Severity::Success => Color::Green,
                Severity::Error => Color::Red,
                Severity::Info => Color::White,
            };
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(BORDER)),
                Span::styled(pad_to_width(&toast.message, inner), Style::default().fg(color)),
                Span::styled(" │", Style::default().fg(BORDER)),
            ])
        }
        None => boxed("", inner),
    };
    f.render_widget(Paragraph::new(toast_line), chunks[1]);

    let status = format!(
        "Pending: {} | Runtime: {}",
        wizard.pending_count(),
        format_runtime(state.start_time)
    );
    f.render_widget(Paragraph::new(boxed(&status, inner)), chunks[2]);

    let logs_label = if state.show_logs { "wizard" } else { "logs" };
    let keys = format!("[tab] next  [enter] select  [esc] close  [q] quit  [l] {}", logs_label);
    f.render_widget(Paragraph::new(boxed(&keys, inner)), chunks[3]);
}

// ===== HELPER FUNCTIONS =====

fn page_title(wizard: &Wizard) -> String {
    match wizard.current_page() {
        Page::Login => match wizard.current_form() {
            Form::Login => "Login".to_string(),
            Form::Signup => "Sign up".to_string(),
            Form::Otp => "Verify code".to_string(),
        },
        Page::Dashboard => "Dashboard".to_string(),
        Page::Onboarding => "List your property".to_string(),
        Page::Success => "Submitted".to_string(),
    }
}

/// Read-only lines shown above the elements
pub fn context_lines(wizard: &Wizard) -> Vec<String> {
    let draft = wizard.draft();
    match wizard.current_page() {
        Page::Login => match wizard.current_form() {
            Form::Login => vec!["Log in to manage your properties".to_string()],
            Form::Signup => vec!["Create your host account".to_string()],
            Form::Otp => vec![format!(
                "Enter the code sent to {}",
                wizard.field(crate::wizard::FieldId::LoginEmail)
            )],
        },
        Page::Dashboard => {
            let mut lines = vec![format!("Showing: {}", wizard.dashboard_tab().title())];
            if draft.name.is_empty() {
                lines.push("No properties yet".to_string());
            } else {
                lines.push(format!("Draft: {}", draft.name));
            }
            lines
        }
        Page::Onboarding => match wizard.current_step() {
            2 => vec![format!(
                "Images {}",
                image_count_label(draft.images.len(), wizard.config().image_minimum)
            )],
            3 if draft.rooms.is_empty() => vec!["No room types yet".to_string()],
            3 => draft
                .rooms
                .iter()
                .map(|room| format!("{} | {} | {}", room.name, room.meta_line(), room.base_price))
                .collect(),
            5 => vec![format!(
                "Documents uploaded: {}/4 | Bank: {}",
                draft.documents.uploaded.len(),
                if draft.documents.bank_verified { "verified" } else { "not verified" }
            )],
            6 => vec![
                format!("Property: {}", draft.name),
                format!("Type: {}", draft.property_type),
                format!("Location: {} {}", draft.location.address, draft.location.city),
                format!("Amenities: {}", draft.amenities.len()),
                format!("Room types: {}", draft.rooms.len()),
                format!("Images: {}", draft.images.len()),
            ],
            _ => Vec::new(),
        },
        Page::Success => vec![
            "Property submitted!".to_string(),
            format!("{} has been submitted for review.", draft.name),
        ],
    }
}

fn element_line<'a>(wizard: &Wizard, element: &Element, selected: bool) -> Line<'a> {
    let marker = if selected { "▶ " } else { "  " };
    let base = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    match element {
        Element::Field(field) => {
            let cursor = if selected { "▏" } else { "" };
            Line::from(vec![
                Span::styled(marker.to_string(), base),
                Span::styled(format!("{}: ", field.label()), base.fg(Color::Gray)),
                Span::styled(format!("{}{}", wizard.field(*field), cursor), base),
            ])
        }
        Element::Toggle(toggle) => {
            let mark = if wizard.is_toggled(*toggle) { "x" } else { " " };
            Line::from(vec![
                Span::styled(marker.to_string(), base),
                Span::styled(format!("[{}] {}", mark, toggle.label()), base),
            ])
        }
        Element::OtpCells => {
            let otp = wizard.otp();
            let mut spans = vec![Span::styled(marker.to_string(), base)];
            for index in 0..otp.len() {
                let ch = otp.cell(index).unwrap_or(' ');
                let style = if selected && index == otp.focus() {
                    base.fg(Color::Black).bg(Color::Cyan)
                } else {
                    base
                };
                spans.push(Span::styled(format!("[{}]", ch), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
        Element::Button { label, disabled, .. } => {
            let style = if *disabled {
                base.fg(Color::DarkGray)
            } else {
                base.fg(Color::Cyan)
            };
            Line::from(vec![
                Span::styled(marker.to_string(), base),
                Span::styled(format!("[ {} ]", label), style),
            ])
        }
    }
}

fn progress_spans(wizard: &Wizard) -> Vec<Span<'static>> {
    let steps = wizard.steps();
    let mut spans = Vec::new();
    for (index, indicator) in steps.indicators().iter().enumerate() {
        let (symbol, color) = match indicator {
            StepIndicator::Completed => ("✓", Color::Green),
            StepIndicator::Active => ("●", Color::Yellow),
            StepIndicator::Pending => ("○", Color::White),
        };
        spans.push(Span::styled(format!("{} {}", symbol, index + 1), Style::default().fg(color)));
        if let Some(done) = steps.connectors().get(index) {
            let color = if *done { Color::Green } else { Color::DarkGray };
            spans.push(Span::styled(" ── ", Style::default().fg(color)));
        }
    }
    spans
}

fn boxed<'a>(text: &str, width: usize) -> Line<'a> {
    Line::from(vec![
        Span::styled("│ ", Style::default().fg(BORDER)),
        Span::raw(pad_to_width(text, width)),
        Span::styled(" │", Style::default().fg(BORDER)),
    ])
}

fn separator<'a>(width: usize) -> Line<'a> {
    Line::from(vec![
        Span::styled("├", Style::default().fg(BORDER)),
        Span::styled("─".repeat(width.saturating_sub(2)), Style::default().fg(BORDER)),
        Span::styled("┤", Style::default().fg(BORDER)),
    ])
}

/// Pad string to width (truncate with ellipsis if too long)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Format runtime duration
fn format_runtime(start_time: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(start_time);

    let total_seconds = duration.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
