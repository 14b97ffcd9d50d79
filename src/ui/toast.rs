//! Transient notification shown in the bottom-right corner.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::{Duration, Instant};

use crate::ui::theme::{POPUP_BORDER, TOAST_TEXT};

pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Two cells of padding plus borders on each side.
        let width = (self.message.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(TOAST_TEXT))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(text, toast_area);
    }
}
