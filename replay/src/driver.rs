//! Script runners. Both feed one queue consumed by one loop; they differ in
//! where timer ticks come from.

use chipin_core::models::{PageEvent, TimerEvent};
use chipin_core::script::ScriptStep;
use chipin_core::ticker::TickSchedule;
use chipin_core::{EventQueue, PageConfig, PageState};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

/// `wait` lines advance a simulated clock; ticks are derived from it.
pub fn run_simulated(config: &PageConfig, steps: &[ScriptStep]) -> (PageState, EventQueue) {
    let mut queue = EventQueue::new();
    let mut state = PageState::new(config);
    let mut schedule = TickSchedule::new(config.tick_interval);

    for step in steps {
        match step {
            ScriptStep::Event(event) => {
                queue.push(event.clone());
            }
            ScriptStep::Wait(elapsed) => {
                let due = schedule.advance(*elapsed);
                debug!(?elapsed, due, "simulated wait");
                for _ in 0..due {
                    queue.push(TimerEvent::Tick.into());
                }
            }
        }
        state = queue.process(&state);
        schedule.sync(state.timer.running);
    }
    (state, queue)
}

enum Msg {
    Event(PageEvent),
    /// Tick from the ticker of the given generation.
    Tick(u64),
    Done,
}

/// `wait` lines really sleep; a tokio ticker runs only while the timer does.
pub async fn run_live(config: &PageConfig, steps: Vec<ScriptStep>) -> (PageState, EventQueue) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    let script_tx = tx.clone();
    let feeder = tokio::spawn(async move {
        for step in steps {
            match step {
                ScriptStep::Event(event) => {
                    if script_tx.send(Msg::Event(event)).is_err() {
                        return;
                    }
                }
                ScriptStep::Wait(elapsed) => tokio::time::sleep(elapsed).await,
            }
        }
        let _ = script_tx.send(Msg::Done);
    });

    let mut queue = EventQueue::new();
    let mut state = PageState::new(config);
    let mut ticker: Option<JoinHandle<()>> = None;
    let mut generation = 0u64;

    while let Some(msg) = rx.recv().await {
        match msg {
            Msg::Event(event) => {
                queue.push(event);
            }
            Msg::Tick(from) if from == generation && ticker.is_some() => {
                queue.push(TimerEvent::Tick.into());
            }
            Msg::Tick(from) => {
                debug!(from, generation, "dropping tick from a stopped ticker");
                continue;
            }
            Msg::Done => break,
        }
        state = queue.process(&state);

        match (state.timer.running, ticker.is_some()) {
            (true, false) => {
                generation += 1;
                debug!(generation, "ticker started");
                ticker = Some(spawn_ticker(tx.clone(), config.tick_interval, generation));
            }
            (false, true) => {
                if let Some(handle) = ticker.take() {
                    handle.abort();
                }
                debug!(generation, "ticker stopped");
            }
            _ => {}
        }
    }

    if let Some(handle) = ticker.take() {
        handle.abort();
    }
    feeder.abort();
    (state, queue)
}

fn spawn_ticker(tx: mpsc::UnboundedSender<Msg>, period: Duration, generation: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + period, period);
        loop {
            ticks.tick().await;
            if tx.send(Msg::Tick(generation)).is_err() {
                break;
            }
        }
    })
}
