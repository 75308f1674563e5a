//! The job application form page.
//!
//! Field rows are derived from the store on every pass, so the conditional
//! fields appear and disappear with the selected position instead of being
//! hidden case by case. The page keeps only presentation state (focus,
//! editing buffer); all values and errors live in the [`FormStore`].

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use tui_input::{Input, backend::crossterm::EventHandler};

use form::{Field, FormStore, Position, Skill};

use crate::{
    action::Action,
    components::Component,
    tui::{EventResponse, Frame},
};

/// One focusable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Single-line text editor for a scalar field.
    Text(Field),
    /// The position selector; Left/Right/Space cycle through the options.
    Position,
    /// One skill checkbox; Space/Enter toggle.
    Skill(Skill),
    Submit,
}

/// Focusable rows in display order for the current position.
fn active_slots(store: &FormStore) -> Vec<Slot> {
    let mut slots = vec![
        Slot::Text(Field::FullName),
        Slot::Text(Field::Email),
        Slot::Text(Field::PhoneNumber),
        Slot::Position,
    ];
    match store.values().position.position() {
        Position::Developer => slots.push(Slot::Text(Field::RelevantExperience)),
        Position::Designer => {
            slots.push(Slot::Text(Field::RelevantExperience));
            slots.push(Slot::Text(Field::PortfolioUrl));
        }
        Position::Manager => slots.push(Slot::Text(Field::ManagementExperience)),
    }
    slots.extend(Skill::iter().map(Slot::Skill));
    slots.push(Slot::Text(Field::InterviewTime));
    slots.push(Slot::Submit);
    slots
}

pub struct FormPage {
    focused: usize,
    editing: bool,
    input: Input,
}

impl FormPage {
    pub fn new() -> Self {
        Self {
            focused: 0,
            editing: false,
            input: Input::default(),
        }
    }

    fn focused_slot(&self, store: &FormStore) -> Slot {
        let slots = active_slots(store);
        slots[self.focused.min(slots.len() - 1)]
    }

    fn focus_next(&mut self, store: &FormStore) {
        let len = active_slots(store).len();
        self.focused = (self.focused + 1) % len;
    }

    fn focus_prev(&mut self, store: &FormStore) {
        let len = active_slots(store).len();
        self.focused = self.focused.checked_sub(1).unwrap_or(len - 1);
    }

    fn cycle_position(&mut self, store: &mut FormStore, dir: i32) {
        let options: Vec<Position> = Position::iter().collect();
        let current = store.values().position.position();
        let idx = options.iter().position(|p| *p == current).unwrap_or(0) as i32;
        let next = (idx + dir).rem_euclid(options.len() as i32) as usize;
        store.set_position(options[next]);
        // The slot list may have shrunk (e.g. Designer -> Manager).
        self.focused = self.focused.min(active_slots(store).len() - 1);
    }

    fn start_editing(&mut self, field: Field, store: &FormStore) {
        let existing = store.values().text(field).unwrap_or("").to_string();
        self.input = Input::default().with_value(existing);
        self.editing = true;
    }

    fn commit_editing(&mut self, store: &mut FormStore) {
        if let Slot::Text(field) = self.focused_slot(store) {
            if let Err(e) = store.set_text(field, self.input.value()) {
                // Unreachable while the slot list mirrors the guards.
                tracing::warn!("rejected edit of {field}: {e}");
            }
        }
        self.editing = false;
        self.input = Input::default();
    }

    fn cancel_editing(&mut self) {
        self.editing = false;
        self.input = Input::default();
    }

    /// Row text for one slot, plus its error message if the last validation
    /// pass flagged the field.
    fn slot_lines<'a>(&self, slot: Slot, focused: bool, store: &FormStore) -> Vec<Line<'a>> {
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let mut lines = Vec::new();

        match slot {
            Slot::Text(field) => {
                let mut spans = vec![
                    Span::raw(marker.to_string()),
                    Span::styled(format!("{}: ", field.label()), label_style),
                ];
                if focused && self.editing {
                    spans.push(Span::styled(
                        format!("{}▏", self.input.value()),
                        Style::default().fg(Color::Yellow),
                    ));
                } else {
                    spans.push(Span::raw(
                        store.values().text(field).unwrap_or("").to_string(),
                    ));
                }
                lines.push(Line::from(spans));
                if let Some(msg) = store.error(field) {
                    lines.push(error_line(msg));
                }
            }
            Slot::Position => {
                lines.push(Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::styled(format!("{}: ", Field::Position.label()), label_style),
                    Span::styled(
                        format!("◂ {} ▸", store.values().position.position()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            Slot::Skill(skill) => {
                if skill == Skill::Javascript {
                    lines.push(Line::from(Span::styled(
                        format!("  {}:", Field::AdditionalSkills.label()),
                        Style::default().fg(Color::White),
                    )));
                }
                let mark = if store.values().additional_skills.get(skill) {
                    "[x]"
                } else {
                    "[ ]"
                };
                lines.push(Line::from(vec![
                    Span::raw(format!("  {marker}")),
                    Span::styled(format!("{mark} {}", skill.label()), label_style),
                ]));
                if skill == Skill::Python {
                    if let Some(msg) = store.error(Field::AdditionalSkills) {
                        lines.push(error_line(msg));
                    }
                }
            }
            Slot::Submit => {
                lines.push(Line::raw(""));
                let style = if focused {
                    Style::default().fg(Color::Black).bg(Color::Green).bold()
                } else {
                    Style::default().fg(Color::Green)
                };
                lines.push(Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::styled("[ Submit ]", style),
                ]));
            }
        }
        lines
    }
}

fn error_line<'a>(msg: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!("      ✗ {msg}"),
        Style::default().fg(Color::Red),
    ))
}

impl Component for FormPage {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        store: &mut FormStore,
    ) -> Result<Option<EventResponse<Action>>> {
        if self.editing {
            match key.code {
                KeyCode::Enter => self.commit_editing(store),
                KeyCode::Esc => self.cancel_editing(),
                _ => {
                    self.input.handle_event(&crossterm::event::Event::Key(key));
                }
            }
            return Ok(Some(EventResponse::Stop(Action::Update)));
        }

        let response = match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev(store);
                Some(Action::Update)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus_next(store);
                Some(Action::Update)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                match self.focused_slot(store) {
                    Slot::Position => {
                        let dir = if key.code == KeyCode::Left { -1 } else { 1 };
                        self.cycle_position(store, dir);
                        Some(Action::Update)
                    }
                    Slot::Skill(skill) => {
                        let selected = store.values().additional_skills.get(skill);
                        store.set_skill(skill, !selected);
                        Some(Action::Update)
                    }
                    _ => None,
                }
            }
            KeyCode::Enter => match self.focused_slot(store) {
                Slot::Text(field) => {
                    self.start_editing(field, store);
                    Some(Action::Update)
                }
                Slot::Position => {
                    self.cycle_position(store, 1);
                    Some(Action::Update)
                }
                Slot::Skill(skill) => {
                    let selected = store.values().additional_skills.get(skill);
                    store.set_skill(skill, !selected);
                    Some(Action::Update)
                }
                Slot::Submit => Some(Action::Submit),
            },
            // Quit is a request, not page-local: let it keep propagating.
            KeyCode::Esc => return Ok(Some(EventResponse::Continue(Action::Quit))),
            _ => None,
        };
        Ok(response.map(EventResponse::Stop))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, store: &FormStore) -> Result<()> {
        let block = Block::default()
            .title(" Job Application Form ")
            .borders(Borders::ALL)
            .title_style(Style::default().bold());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for (i, slot) in active_slots(store).into_iter().enumerate() {
            lines.extend(self.slot_lines(slot, i == self.focused, store));
        }

        lines.push(Line::raw(""));
        let hints = if self.editing {
            "Enter: Save   Esc: Discard"
        } else {
            "↑/↓/Tab: Move   Enter: Edit/Activate   ←/→/Space: Change   Esc: Quit"
        };
        lines.push(Line::from(Span::raw(hints)).fg(Color::DarkGray));

        let para = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        f.render_widget(para, inner);
        Ok(())
    }
}
