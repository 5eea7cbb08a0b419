//! Scene clock with looping timers and delayed calls
//!
//! The clock only moves when the scene advances it, so pausing the scene
//! pauses every timer. Firing produces plain event values; the scene matches
//! on them and runs the handler. Timers scheduled while handling a frame's
//! events are measured from the clock's current time, so a zero delay fires on
//! the next advance.

pub type TimerId = u64;

#[derive(Debug, Clone)]
struct ScheduledTimer<E> {
    id: TimerId,
    due_ms: f64,
    interval_ms: Option<f64>,
    event: E,
}

#[derive(Debug, Clone)]
pub struct SceneClock<E> {
    now_ms: f64,
    next_id: TimerId,
    timers: Vec<ScheduledTimer<E>>,
}

impl<E: Clone> SceneClock<E> {
    pub fn new() -> Self {
        SceneClock {
            now_ms: 0.0,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Milliseconds of scene time elapsed since the clock was created
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Fires `event` every `interval_ms`, first after one full interval.
    pub fn add_loop(&mut self, interval_ms: u64, event: E) -> TimerId {
        // A zero interval would fire forever within a single advance
        let interval = (interval_ms as f64).max(1.0);
        self.schedule(interval, Some(interval), event)
    }

    /// Fires `event` once after `delay_ms`.
    pub fn delayed_call(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.schedule(delay_ms as f64, None, event)
    }

    /// Moves the clock forward and returns every event that fell due, in due
    /// order. Ties fire in the order the timers were created.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<E> {
        self.now_ms += dt_ms.max(0.0);

        let mut fired: Vec<(f64, TimerId, E)> = Vec::new();

        for timer in self.timers.iter_mut() {
            while timer.due_ms <= self.now_ms {
                fired.push((timer.due_ms, timer.id, timer.event.clone()));
                match timer.interval_ms {
                    Some(interval) => timer.due_ms += interval,
                    None => {
                        timer.due_ms = f64::INFINITY;
                        break;
                    }
                }
            }
        }

        self.timers.retain(|timer| timer.due_ms.is_finite());

        fired.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }

    fn schedule(&mut self, delay_ms: f64, interval_ms: Option<f64>, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(ScheduledTimer {
            id,
            due_ms: self.now_ms + delay_ms,
            interval_ms,
            event,
        });
        id
    }
}

impl<E: Clone> Default for SceneClock<E> {
    fn default() -> Self {
        Self::new()
    }
}
