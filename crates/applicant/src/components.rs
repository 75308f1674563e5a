use color_eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::{
    action::Action,
    tui::{Event, EventResponse, Frame},
};
use form::FormStore;

pub mod confirmation;
pub mod form_page;
pub mod popup;

/// A visual, interactive element of the user interface.
///
/// Components receive raw terminal events, may answer with an [`Action`]
/// (and decide whether the event keeps propagating), react to actions from
/// the central loop, and draw themselves. All form data lives in the
/// [`FormStore`]; components only keep presentation state of their own.
pub trait Component {
    fn handle_events(
        &mut self,
        event: Event,
        store: &mut FormStore,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(key_event, store)?,
            Event::Mouse(mouse_event) => self.handle_mouse_events(mouse_event, store)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _store: &mut FormStore,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn handle_mouse_events(
        &mut self,
        _mouse: MouseEvent,
        _store: &mut FormStore,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn update(&mut self, _action: Action, _store: &mut FormStore) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, store: &FormStore) -> Result<()>;
}
