use food_map_core::{DeferredTask, Scheduler};
use std::time::{Duration, Instant};

/// Deadline queue drained by the event loop on every tick.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    queue: Vec<(Instant, DeferredTask)>,
}

impl DeadlineScheduler {
    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        self.queue.sort_by_key(|(deadline, _)| *deadline);
        let split = self.queue.partition_point(|(deadline, _)| *deadline <= now);
        self.queue.drain(..split).map(|(_, task)| task).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        self.queue.push((Instant::now() + delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::DeadlineScheduler;
    use food_map_core::{DeferredTask, Scheduler};
    use std::time::{Duration, Instant};

    fn release(id: &str) -> DeferredTask {
        DeferredTask::ReleaseEmphasis {
            dish_id: id.to_string(),
            generation: 1,
        }
    }

    #[test]
    fn only_due_tasks_are_taken_in_deadline_order() {
        let now = Instant::now();
        let mut scheduler = DeadlineScheduler::default();
        scheduler.queue.push((now + Duration::from_secs(60), release("late")));
        scheduler.queue.push((now, release("second")));
        scheduler.queue.push((now - Duration::from_millis(10), release("first")));

        let due = scheduler.take_due(now);
        assert_eq!(due, vec![release("first"), release("second")]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn scheduled_tasks_wait_for_their_delay() {
        let mut scheduler = DeadlineScheduler::default();
        scheduler.schedule(Duration::from_secs(60), release("later"));
        assert!(scheduler.take_due(Instant::now()).is_empty());
        assert_eq!(scheduler.pending(), 1);
    }
}
