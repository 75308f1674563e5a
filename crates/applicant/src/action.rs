use serde::{Deserialize, Serialize};
use strum::Display;

/// Messages flowing through the single action channel of the event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// A component changed something visible; redraw on the next frame.
    Update,
    /// The submit button was activated.
    Submit,
    ClosePopup,
}
