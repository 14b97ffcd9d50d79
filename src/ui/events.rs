use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::quote::Quote;
use crate::ui::controller::SessionToken;

/// Result of a background fetch, tagged with the session that started it.
#[derive(Debug)]
pub struct FetchDone {
    pub token: SessionToken,
    /// `Err` carries the reason the fetch task died.
    pub result: Result<Quote, String>,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    QuoteFetched(FetchDone),
    /// Terminal input failed or ended; no further keys will arrive.
    InputClosed,
    /// The process was asked to terminate (SIGTERM/SIGHUP, or Ctrl+C off unix).
    Terminated,
}

/// Merges terminal input, ticks, signals and fetch results into one queue.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Start the input/tick and signal tasks. Must be called inside a tokio
    /// runtime. `tick_rate` must be non-zero.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        listen_for_termination(tx.clone())?;
        spawn_input(EventStream::new(), tick_rate, tx.clone());
        Ok(Self { rx, tx })
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward `input` and periodic ticks to `tx` until the input errors or
/// ends, then post [`AppEvent::InputClosed`].
pub fn spawn_input<S>(input: S, tick_rate: Duration, tx: UnboundedSender<AppEvent>) -> JoinHandle<()>
where
    S: Stream<Item = io::Result<Event>> + Unpin + Send + 'static,
{
    tokio::spawn(pump_input(input, tick_rate, tx))
}

async fn pump_input<S>(mut input: S, tick_rate: Duration, tx: UnboundedSender<AppEvent>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        let next = tokio::select! {
            _ = ticker.tick() => Some(Ok(Some(AppEvent::Tick))),
            event = input.next() => event.map(|r| r.map(translate)),
        };

        let event = match next {
            Some(Ok(Some(event))) => event,
            Some(Ok(None)) => continue,
            Some(Err(err)) => {
                tracing::error!(error = %err, "terminal input error");
                break;
            }
            None => {
                tracing::warn!("terminal input stream ended");
                break;
            }
        };

        if tx.send(event).is_err() {
            return;
        }
    }

    let _ = tx.send(AppEvent::InputClosed);
}

/// Post [`AppEvent::Terminated`] once a termination signal arrives.
///
/// Handlers are registered before this returns, so a signal delivered
/// afterwards is never lost to the default disposition.
pub fn listen_for_termination(tx: UnboundedSender<AppEvent>) -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sighup = signal(SignalKind::hangup())?;
        tokio::spawn(async move {
            tokio::select! {
                _ = sigterm.recv() => {},
                _ = sighup.recv() => {},
            }
            tracing::info!("termination signal received");
            let _ = tx.send(AppEvent::Terminated);
        });
    }

    #[cfg(not(unix))]
    {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("termination signal received");
                let _ = tx.send(AppEvent::Terminated);
            }
        });
    }

    Ok(())
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}
