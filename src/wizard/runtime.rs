//! Async driver for the wizard
//!
//! One task owns the event loop: it applies each event to the shared
//! [`Wizard`] and carries out the returned effects by spawning backend
//! calls and timers. Those tasks report back through the same channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::backend::Backend;
use crate::errors::{HostboardError, Result};

use super::app::Wizard;
use super::events::{Effect, WizardEvent};

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Event plus an optional acknowledgement sent once it has been applied
type Envelope = (WizardEvent, Option<oneshot::Sender<()>>);

/// Running wizard plus its event loop
pub struct WizardRuntime {
    wizard: Arc<Mutex<Wizard>>,
    events: mpsc::UnboundedSender<Envelope>,
    worker: JoinHandle<()>,
}

impl WizardRuntime {
    /// Spawn the event loop. Must be called inside a tokio runtime.
    pub fn start(wizard: Wizard, backend: Arc<dyn Backend>) -> Self {
        let wizard = Arc::new(Mutex::new(wizard));
        let (events, rx) = mpsc::unbounded_channel();

        let executor = EffectExecutor {
            backend,
            events: events.clone(),
            countdown: None,
        };
        let worker = tokio::spawn(run_loop(wizard.clone(), executor, rx));

        Self {
            wizard,
            events,
            worker,
        }
    }

    /// Queue an event for the loop
    pub fn dispatch(&self, event: WizardEvent) -> Result<()> {
        self.events
            .send((event, None))
            .map_err(|_| HostboardError::RuntimeStopped)
    }

    /// Queue an event and wait until the wizard has applied it
    pub async fn send(&self, event: WizardEvent) -> Result<()> {
        let (ack, applied) = oneshot::channel();
        self.events
            .send((event, Some(ack)))
            .map_err(|_| HostboardError::RuntimeStopped)?;
        applied.await.map_err(|_| HostboardError::RuntimeStopped)
    }

    /// Clone of the current wizard state (for rendering)
    pub async fn snapshot(&self) -> Wizard {
        self.wizard.lock().await.clone()
    }

    /// Shared handle to the wizard
    pub fn wizard(&self) -> Arc<Mutex<Wizard>> {
        self.wizard.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.worker.is_finished()
    }
}

impl Drop for WizardRuntime {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn run_loop(
    wizard: Arc<Mutex<Wizard>>,
    mut executor: EffectExecutor,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
) {
    while let Some((event, ack)) = rx.recv().await {
        let effects = wizard.lock().await.handle(event);
        for effect in effects {
            executor.run(effect);
        }
        if let Some(ack) = ack {
            let _ = ack.send(());
        }
    }
    executor.stop_countdown(None);
}

struct EffectExecutor {
    backend: Arc<dyn Backend>,
    events: mpsc::UnboundedSender<Envelope>,
    /// Generation and task of the live countdown ticker
    countdown: Option<(u64, JoinHandle<()>)>,
}

impl EffectExecutor {
    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Dispatch(ticket) => {
                let backend = self.backend.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = backend
                        .perform(&ticket.request)
                        .await
                        .map_err(|e| e.to_string());
                    if events
                        .send((WizardEvent::ActionCompleted { ticket, result }, None))
                        .is_err()
                    {
                        tracing::debug!("runtime stopped before action completed");
                    }
                });
            }
            Effect::StartCountdown { generation } => {
                self.stop_countdown(None);
                let events = self.events.clone();
                let handle = tokio::spawn(async move {
                    let mut ticker = interval_at(Instant::now() + COUNTDOWN_PERIOD, COUNTDOWN_PERIOD);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        ticker.tick().await;
                        if events.send((WizardEvent::CountdownTick { generation }, None)).is_err() {
                            break;
                        }
                    }
                });
                self.countdown = Some((generation, handle));
            }
            Effect::StopCountdown { generation } => self.stop_countdown(Some(generation)),
            Effect::HideToastAfter { generation, after } => {
                let events = self.events.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = events.send((WizardEvent::ToastExpired { generation }, None));
                });
            }
        }
    }

    /// Abort the ticker, or only the ticker of `generation` when given
    fn stop_countdown(&mut self, generation: Option<u64>) {
        let matches = match (&self.countdown, generation) {
            (Some((running, _)), Some(generation)) => *running == generation,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if matches {
            if let Some((_, handle)) = self.countdown.take() {
                handle.abort();
            }
        }
    }
}
