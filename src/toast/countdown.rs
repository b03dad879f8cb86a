// SPDX-License-Identifier: MPL-2.0
//! Deferred auto-dismiss countdowns.
//!
//! A [`Scheduler`] delivers a [`CountdownId`] back to its toast site once
//! the delay has elapsed, unless the countdown was cancelled first.
//! Cancellation is synchronous: when [`Scheduler::cancel`] returns, the
//! countdown will not be delivered by the scheduler.
//!
//! Two schedulers ship with the crate:
//!
//! - [`ManualScheduler`] runs on a virtual clock advanced by the caller.
//!   Tests and headless hosts use it.
//! - [`TaskScheduler`] turns each countdown into an abortable
//!   [`iced::Task`] sleeping on the tokio runtime.

use iced::Task;
use std::fmt;
use std::time::Duration;

/// Identity of one scheduled countdown. Never reused within a toast site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountdownId(u64);

impl CountdownId {
    #[must_use]
    pub fn first() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for CountdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Deferred-execution primitive countdowns are built on.
pub trait Scheduler {
    /// Token used to cancel a scheduled countdown.
    type Handle;

    /// Arranges for `countdown` to be delivered after `delay`.
    fn schedule_after(&mut self, delay: Duration, countdown: CountdownId) -> Self::Handle;

    /// Cancels a countdown. It must not be delivered after this returns.
    fn cancel(&mut self, handle: Self::Handle);
}

// =============================================================================
// Manual (virtual clock) scheduler
// =============================================================================

/// Handle returned by [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: ManualHandle,
    due: Duration,
    countdown: CountdownId,
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of countdowns still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Time remaining until the earliest countdown is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.due.saturating_sub(self.now))
            .min()
    }

    /// Advances the clock and returns every countdown that came due, in due order.
    ///
    /// Returned countdowns are removed; they will not be returned again.
    pub fn advance(&mut self, by: Duration) -> Vec<CountdownId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.due, entry.handle.0));
        due.into_iter().map(|entry| entry.countdown).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_after(&mut self, delay: Duration, countdown: CountdownId) -> ManualHandle {
        let handle = ManualHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due: self.now + delay,
            countdown,
        });
        handle
    }

    fn cancel(&mut self, handle: ManualHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }
}

// =============================================================================
// Iced task scheduler
// =============================================================================

/// Scheduler producing abortable [`iced::Task`]s.
///
/// Scheduled countdowns accumulate until the host collects them with
/// [`TaskScheduler::take_task`] and returns the task from its `update`.
#[derive(Default)]
pub struct TaskScheduler {
    tasks: Vec<Task<CountdownId>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the countdown tasks scheduled since the last call.
    pub fn take_task(&mut self) -> Task<CountdownId> {
        if self.tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(std::mem::take(&mut self.tasks))
        }
    }
}

impl fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("untaken", &self.tasks.len())
            .finish()
    }
}

impl Scheduler for TaskScheduler {
    type Handle = iced::task::Handle;

    fn schedule_after(&mut self, delay: Duration, countdown: CountdownId) -> Self::Handle {
        // The sleep is created on first poll, inside the runtime.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| countdown,
        )
        .abortable();
        self.tasks.push(task);
        handle
    }

    fn cancel(&mut self, handle: Self::Handle) {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_fires_once_at_its_due_time() {
        let mut scheduler = ManualScheduler::new();
        let id = CountdownId::first();
        scheduler.schedule_after(Duration::from_millis(500), id);

        assert!(scheduler.advance(Duration::from_millis(499)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id]);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn cancelled_countdown_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_after(Duration::from_secs(1), CountdownId::first());

        scheduler.cancel(handle);

        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn cancel_leaves_other_countdowns_alone() {
        let mut scheduler = ManualScheduler::new();
        let first = CountdownId::first();
        let second = first.next();
        let handle = scheduler.schedule_after(Duration::from_secs(1), first);
        scheduler.schedule_after(Duration::from_secs(2), second);

        scheduler.cancel(handle);

        assert_eq!(scheduler.advance(Duration::from_secs(2)), vec![second]);
    }

    #[test]
    fn due_countdowns_come_back_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let late = CountdownId::first();
        let early = late.next();
        scheduler.schedule_after(Duration::from_secs(3), late);
        scheduler.schedule_after(Duration::from_secs(1), early);

        assert_eq!(scheduler.next_due_in(), Some(Duration::from_secs(1)));
        assert_eq!(scheduler.advance(Duration::from_secs(3)), vec![early, late]);
    }

    #[test]
    fn delays_are_relative_to_the_current_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_secs(1));
        let id = CountdownId::first();
        scheduler.schedule_after(Duration::from_secs(2), id);

        assert!(scheduler.advance(Duration::from_millis(1999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id]);
        assert_eq!(scheduler.now(), Duration::from_secs(3));
    }

    #[test]
    fn task_scheduler_hands_out_scheduled_tasks_once() {
        let mut scheduler = TaskScheduler::new();
        let _handle = scheduler.schedule_after(Duration::from_secs(1), CountdownId::first());

        assert_eq!(scheduler.tasks.len(), 1);
        let _task = scheduler.take_task();
        assert!(scheduler.tasks.is_empty());
    }
}
