use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, AUTHOR_TEXT, GLOBAL_BORDER, HEADER_TEXT, QUOTE_TEXT, TRIGGER_DISABLED,
};
use crate::ui::view::TerminalView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CARD_WIDTH: u16 = 72;
/// Borders plus the blank lines above the quote and above the trigger.
const CARD_CHROME_ROWS: u16 = 4;
const TRIGGER_ROWS: u16 = 1;
/// Blank line plus the author line.
const AUTHOR_ROWS: u16 = 2;

pub fn draw(frame: &mut Frame<'_>, view: &TerminalView) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(view.counter()), header);
    frame.render_widget(Clear, body);
    let width = card_width(CARD_WIDTH, body);
    let height = card_height(view, width.saturating_sub(2));
    render_card(frame, card_rect(CARD_WIDTH, height, body), view);
    frame.render_widget(Footer::new().widget(footer), footer);

    if let Some(toast) = view.toast() {
        toast.render(frame, area);
    }
}

/// Width `card_rect` will give the card inside `area`.
fn card_width(max_width: u16, area: Rect) -> u16 {
    card_rect(max_width, area.height.max(1), area).width
}

/// Rows needed to show the whole card at `inner_width`.
fn card_height(view: &TerminalView, inner_width: u16) -> u16 {
    let quote_rows = wrapped_rows(view.quote_text(), inner_width);
    let author_rows = if view.author().is_some() { AUTHOR_ROWS } else { 0 };
    CARD_CHROME_ROWS + quote_rows + author_rows + TRIGGER_ROWS
}

/// Rows `text` occupies when word-wrapped at `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;
    let mut line = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if line == 0 {
            rows += 1;
            line = len;
        } else if line + 1 + len <= width {
            line += 1 + len;
        } else {
            rows += 1;
            line = len;
        }
        // Words longer than a row are broken across rows.
        while line > width {
            rows += 1;
            line -= width;
        }
    }

    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_card(frame: &mut Frame<'_>, area: Rect, view: &TerminalView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    if !view.quote_text().is_empty() {
        lines.push(Line::from(Span::styled(
            view.quote_text().to_string(),
            Style::default().fg(QUOTE_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(author) = view.author() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("— {}", author),
            Style::default().fg(AUTHOR_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(trigger_line(view));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn trigger_line(view: &TerminalView) -> Line<'static> {
    if view.trigger_enabled() {
        return Line::from(Span::styled(
            format!("[ {} ]", view.trigger_label()),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let spinner = SPINNER_FRAMES[(view.animation_tick() as usize) % SPINNER_FRAMES.len()];
    Line::from(Span::styled(
        format!("[ {} {} ]", spinner, view.trigger_label()),
        Style::default().fg(TRIGGER_DISABLED),
    ))
}
