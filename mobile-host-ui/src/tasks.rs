/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Cancellable periodic tasks.
//!
//! Every polling loop in the crate is a [`PeriodicTask`] with an explicit
//! [`AttemptPolicy`]. Tasks stop on their own when the tick reports
//! [`TaskStep::Done`] or the attempt budget runs out, and stop unconditionally
//! when dropped.

use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPolicy {
    /// Runs until cancelled.
    Unbounded,
    /// Gives up after this many ticks that did not finish the task.
    MaxAttempts(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStep {
    Continue,
    Done,
}

/// Counts unsuccessful ticks against an [`AttemptPolicy`].
#[derive(Debug, Clone)]
pub struct AttemptBudget {
    policy: AttemptPolicy,
    used: u32,
}

impl AttemptBudget {
    pub fn new(policy: AttemptPolicy) -> Self {
        Self { policy, used: 0 }
    }

    /// Record one tick that left the task unfinished. Returns `false` once
    /// the budget is spent.
    pub fn spend(&mut self) -> bool {
        self.used = self.used.saturating_add(1);
        match self.policy {
            AttemptPolicy::Unbounded => true,
            AttemptPolicy::MaxAttempts(max) => self.used < max,
        }
    }

    pub fn used(&self) -> u32 {
        self.used
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub name: &'static str,
    pub period_ms: u32,
    pub policy: AttemptPolicy,
}

/// A repeating timer. The timer is cancelled when the handle is dropped.
pub struct PeriodicTask {
    name: &'static str,
    interval: Rc<RefCell<Option<Interval>>>,
    running: Rc<Cell<bool>>,
}

impl PeriodicTask {
    pub fn spawn(spec: TaskSpec, mut tick: impl FnMut() -> TaskStep + 'static) -> Self {
        let interval = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        let mut budget = AttemptBudget::new(spec.policy);

        let slot = Rc::downgrade(&interval);
        let alive = Rc::clone(&running);
        let handle = Interval::new(spec.period_ms, move || {
            if !alive.get() {
                return;
            }
            let finished = match tick() {
                TaskStep::Done => true,
                TaskStep::Continue if budget.spend() => false,
                TaskStep::Continue => {
                    log::warn!(
                        "{}: giving up after {} attempts",
                        spec.name,
                        budget.used()
                    );
                    true
                }
            };
            if finished {
                alive.set(false);
                // The interval cannot be dropped from inside its own callback.
                let slot = slot.clone();
                Timeout::new(0, move || {
                    if let Some(slot) = slot.upgrade() {
                        slot.borrow_mut().take();
                    }
                })
                .forget();
            }
        });
        *interval.borrow_mut() = Some(handle);
        log::debug!("{}: started ({} ms)", spec.name, spec.period_ms);

        Self {
            name: spec.name,
            interval,
            running,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn cancel(&self) {
        self.running.set(false);
        self.interval.borrow_mut().take();
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns a group of tasks so they can be cancelled together.
#[derive(Default)]
pub struct TaskSet {
    tasks: Vec<PeriodicTask>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: PeriodicTask) {
        self.tasks.retain(PeriodicTask::is_running);
        self.tasks.push(task);
    }

    pub fn running(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_running()).count()
    }

    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            log::debug!("{}: cancelled", task.name());
            task.cancel();
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
