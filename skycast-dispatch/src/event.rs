//! Terminal events and the background poller that reads them

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Event as seen by components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    /// New terminal size (columns, rows)
    Resize(u16, u16),
}

/// Event straight from crossterm
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

impl RawEvent {
    fn from_crossterm(evt: event::Event) -> Option<Self> {
        match evt {
            event::Event::Key(key) => Some(RawEvent::Key(key)),
            event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
            _ => None,
        }
    }
}

const MAX_EVENTS_PER_BATCH: usize = 20;

/// Poll crossterm on a background task and forward events over `tx`
///
/// Stops when `cancel_token` fires or the receiver is dropped. On
/// cancellation the crossterm buffer is drained so leftover input does not
/// leak into the shell.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        let Ok(evt) = event::read() else { continue };
                        let Some(raw) = RawEvent::from_crossterm(evt) else { continue };
                        if tx.send(raw).is_err() {
                            debug!("event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Convert a raw event, dropping key releases and repeats on terminals that
/// report them
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind != KeyEventKind::Press => None,
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}
