use std::sync::{Arc, Mutex};

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay
pub trait Scheduler: Send + Sync + 'static {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser timers via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, move || task()).forget();
    }
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    pending: Vec<(u64, Task)>,
}

/// Scheduler driven by hand; time only moves on `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and run every task that came due, in due order
    pub fn advance(&self, ms: u32) {
        let due = {
            let Ok(mut clock) = self.clock.lock() else {
                return;
            };
            clock.now_ms += u64::from(ms);
            let now = clock.now_ms;
            let (due, rest): (Vec<_>, Vec<_>) =
                clock.pending.drain(..).partition(|(at, _)| *at <= now);
            clock.pending = rest;
            let mut due = due;
            due.sort_by_key(|(at, _)| *at);
            due
        };
        for (_, task) in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.clock.lock().map(|c| c.pending.len()).unwrap_or(0)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        if let Ok(mut clock) = self.clock.lock() {
            let at = clock.now_ms + u64::from(delay_ms);
            clock.pending.push((at, task));
        }
    }
}
