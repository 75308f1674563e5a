use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use form::FormStore;

use crate::{
    action::Action,
    components::{Component, confirmation::ConfirmationPopup, form_page::FormPage, popup},
    config::Config,
    tui::{Event, EventResponse, Tui},
};

/// The application: the form store, the form page and the optional
/// confirmation popup, driven by one action channel.
///
/// State machine: Editing -> (submit, valid) -> popup open; closing the
/// popup clears the snapshot and returns to Editing. An invalid submit
/// stays in Editing with the error record on display.
pub struct App {
    #[allow(dead_code)] // dirs are consumed by logging; kept for future keys
    config: Config,
    store: FormStore,
    page: FormPage,
    popup: Option<ConfirmationPopup>,
    should_quit: bool,
    should_suspend: bool,
    tick_rate: f64,
    frame_rate: f64,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        Ok(Self {
            config: Config::new()?,
            store: FormStore::new(),
            page: FormPage::new(),
            popup: None,
            should_quit: false,
            should_suspend: false,
            tick_rate,
            frame_rate,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                // The popup sees events first; while it is open it is modal,
                // so even unhandled events stop there.
                let stop_event_propagation = if let Some(popup) = self.popup.as_mut() {
                    match popup.handle_events(e.clone(), &mut self.store)? {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action)?;
                            false
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action)?;
                            true
                        }
                        None => true,
                    }
                } else {
                    false
                };

                if !stop_event_propagation {
                    if let Some(response) = self.page.handle_events(e.clone(), &mut self.store)? {
                        match response {
                            EventResponse::Continue(action) | EventResponse::Stop(action) => {
                                action_tx.send(action)?
                            }
                        }
                    }
                }

                match e {
                    Event::Tick => action_tx.send(Action::Tick)?,
                    Event::Render => action_tx.send(Action::Render)?,
                    Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    Event::Key(key) => {
                        if let Some(action) = global_key_action(key) {
                            action_tx.send(action)?;
                        }
                    }
                    _ => {}
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    tracing::debug!("{action:?}");
                }
                match action {
                    Action::Tick => {}
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Submit => {
                        if self.store.submit() {
                            self.store.capture_snapshot();
                            if let Some(snapshot) = self.store.snapshot() {
                                self.popup = Some(ConfirmationPopup::new(snapshot));
                            }
                        } else {
                            tracing::info!(
                                "submission blocked: {} field(s) invalid",
                                self.store.errors().len()
                            );
                        }
                    }
                    Action::ClosePopup => {
                        if self.popup.take().is_some() {
                            self.store.clear_snapshot();
                        }
                    }
                    Action::Error(ref msg) => tracing::error!("{msg}"),
                    Action::Update => {}
                }

                if let Some(popup) = &mut self.popup {
                    if let Some(follow_up) = popup.update(action.clone(), &mut self.store)? {
                        action_tx.send(follow_up)?;
                    }
                } else if let Some(follow_up) = self.page.update(action.clone(), &mut self.store)? {
                    action_tx.send(follow_up)?;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, frame: &mut crate::tui::Frame<'_>) -> Result<()> {
        let area = frame.area();
        self.page.draw(frame, area, &self.store)?;
        if let Some(popup_component) = &mut self.popup {
            popup::render_backdrop(frame, area);
            popup_component.draw(frame, area, &self.store)?;
        }
        Ok(())
    }
}

/// Keys handled regardless of focus: Ctrl-C quits, Ctrl-Z suspends.
fn global_key_action(key: KeyEvent) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') => Some(Action::Quit),
        KeyCode::Char('z') => Some(Action::Suspend),
        _ => None,
    }
}
