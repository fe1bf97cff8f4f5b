use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    /// Fast cycle: sample metrics.
    MetricsTick,
    /// Slow cycle: list processes.
    ProcessTick,
}

/// Merges terminal input and the two refresh cycles into one stream.
///
/// Ticks are consumed by a single-threaded run loop, so a cycle's next
/// firing is only handled after the previous invocation finished; with
/// skip-on-missed-tick there is never a backlog of stale ticks waiting
/// behind a slow sample.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(metrics_rate: Duration, process_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let loop_tx = tx.clone();
        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut metrics_interval = interval(metrics_rate);
            let mut process_interval = interval(process_rate);
            metrics_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            process_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && loop_tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = metrics_interval.tick() => {
                        if loop_tx.send(Event::MetricsTick).is_err() {
                            break;
                        }
                    }
                    _ = process_interval.tick() => {
                        if loop_tx.send(Event::ProcessTick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, tx, _task: task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// One out-of-band listing refresh after a termination request, giving
    /// the OS process table time to settle. Runs in addition to the
    /// periodic cycle, not instead of it.
    pub fn schedule_process_refresh(&self, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Event::ProcessTick);
        });
    }
}
