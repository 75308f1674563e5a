//! Modal confirmation popup shown after a successful submission.
//!
//! Renders the captured snapshot, never the live values, so edits made while
//! the popup is open cannot leak into the confirmation.

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use form::{ApplicationValues, FormStore};

use crate::{
    action::Action,
    components::Component,
    components::popup::{centered_rect, draw_popup_frame},
    tui::{EventResponse, Frame},
};

pub struct ConfirmationPopup {
    lines: Vec<(&'static str, String)>,
    min_width: u16,
    min_height: u16,
}

impl ConfirmationPopup {
    /// Build the display rows from a submitted snapshot.
    pub fn new(snapshot: &ApplicationValues) -> Self {
        let lines = vec![
            ("Name", snapshot.full_name.clone()),
            ("Email", snapshot.email.clone()),
            ("Phone", snapshot.phone_number.clone()),
            ("Position", snapshot.position.position().to_string()),
            ("Time", snapshot.interview_time.clone()),
        ];
        Self {
            lines,
            min_width: 48,
            min_height: 11,
        }
    }

    fn close_action(&self) -> Action {
        Action::ClosePopup
    }
}

impl Component for ConfirmationPopup {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _store: &mut FormStore,
    ) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(self.close_action()),
            _ => None,
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn update(&mut self, action: Action, _store: &mut FormStore) -> Result<Option<Action>> {
        match action {
            Action::Submit => Ok(Some(self.close_action())),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: ratatui::layout::Rect, _store: &FormStore) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }

        let w = self.min_width.min(area.width);
        let h = self.min_height.min(area.height);
        let dialog = centered_rect(area, w, h);
        let inner = draw_popup_frame(f, dialog, "Submission Complete");

        let mut lines: Vec<Line> = Vec::new();
        for (label, value) in &self.lines {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Green).bold()),
                Span::raw(value.clone()),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::White)),
                Span::raw("/"),
                Span::styled("Esc", Style::default().fg(Color::White)),
                Span::raw(": Close"),
            ])
            .fg(Color::DarkGray),
        );

        let para = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
        f.render_widget(para, inner);
        Ok(())
    }
}
