//! Terminal input plus the two clocks the finder needs.
//!
//! The render clock redraws the view at a steady frame rate. The tick clock
//! only drives the loading throbber, so it runs while the app has asked for
//! animation and is silent otherwise. A resize needs no payload: ratatui
//! picks up the new size on the next draw, so it just forces one.

use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::{Stream, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed (releases and repeats are dropped).
    Key(KeyEvent),
    /// Advance the throbber one frame.
    Tick,
    /// Redraw: the frame interval elapsed or the terminal was resized.
    Render,
}

/// Background reader feeding [`Event`]s to the app loop.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    animating: watch::Sender<bool>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Read from the real terminal.
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        Self::from_stream(EventStream::new(), tick_rate, render_rate)
    }

    /// Read terminal events from any stream (tests feed a channel).
    pub fn from_stream<St>(mut input: St, tick_rate: Duration, render_rate: Duration) -> Self
    where
        St: Stream<Item = io::Result<CrosstermEvent>> + Send + Unpin + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (animating, mut animate_rx) = watch::channel(false);
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + tick_rate, tick_rate);
            let mut frames = interval_at(Instant::now() + render_rate, render_rate);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut animate = false;

            loop {
                let event = tokio::select! {
                    () = task_cancel.cancelled() => break,

                    changed = animate_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        animate = *animate_rx.borrow_and_update();
                        ticks.reset();
                        continue;
                    }

                    _ = ticks.tick(), if animate => Event::Tick,

                    _ = frames.tick() => Event::Render,

                    input_event = input.next() => match input_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Resize(..))) => Event::Render,
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "terminal input error");
                            continue;
                        }
                        None => break,
                    },
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            animating,
            cancel,
        }
    }

    /// Next event, or `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Turn throbber ticks on or off. Repeating the current value is free.
    pub fn animate(&self, on: bool) {
        self.animating.send_if_modified(|current| {
            let changed = *current != on;
            *current = on;
            changed
        });
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
