//! Shared helpers for modal popups.
//!
//! Terminals have no real transparency, so the backdrop is simulated with a
//! solid dark fill drawn over the page before the dialog.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear},
};

use crate::tui::Frame;

/// Dim the page below a modal dialog.
pub fn render_backdrop(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);
}

/// Centered rect of at most `width` x `height`, clamped to `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Clear `area`, draw a rounded titled frame and return the inner drawable
/// rect (the frame area shrunk by the border).
pub fn draw_popup_frame(frame: &mut Frame<'_>, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White).bg(Color::Black));
    frame.render_widget(block, area);

    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
