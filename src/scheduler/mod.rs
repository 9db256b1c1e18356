use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled one-shot task. Cancelling after the task ran is a no-op.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Runs a task once after a delay, on the same thread that scheduled it.
pub trait Scheduler {
    fn run_after(&self, delay: Duration, task: Task) -> TimerHandle;
}

struct ScheduledTask {
    deadline: Duration,
    sequence: u64,
    handle: TimerHandle,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_sequence: u64,
    tasks: Vec<ScheduledTask>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .tasks
            .iter()
            .filter(|scheduled| !scheduled.handle.is_cancelled())
            .count()
    }

    /// Moves the clock forward, firing due tasks in deadline order.
    ///
    /// Tasks may schedule further tasks; those fire too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now.saturating_add(by);
        while let Some(scheduled) = self.pop_due(target) {
            self.clock.borrow_mut().now = scheduled.deadline;
            if scheduled.handle.is_cancelled() {
                continue;
            }
            tracing::trace!(deadline = ?scheduled.deadline, "firing scheduled task");
            (scheduled.task)();
        }
        self.clock.borrow_mut().now = target;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.deadline <= target)
            .min_by_key(|(_, scheduled)| (scheduled.deadline, scheduled.sequence))
            .map(|(index, _)| index)?;
        Some(clock.tasks.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn run_after(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut clock = self.clock.borrow_mut();
        let deadline = clock.now.saturating_add(delay);
        let sequence = clock.next_sequence;
        clock.next_sequence = sequence.saturating_add(1);
        clock.tasks.push(ScheduledTask {
            deadline,
            sequence,
            handle: handle.clone(),
            task,
        });
        handle
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
