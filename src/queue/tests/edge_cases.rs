//! Edge Case Tests
//!
//! Empty queues, snapshot isolation, iteration and custom equality.

#[cfg(test)]
mod tests {
    use crate::queue::api::{ConcurrentUniqueQueue, QueueError, UniqueQueue};
    use std::hash::{Hash, Hasher};

    #[test]
    fn test_empty_queue_failures() {
        let mut queue: UniqueQueue<u8> = UniqueQueue::new();

        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert_eq!(queue.peek(), Err(QueueError::Empty));
        assert_eq!(queue.try_dequeue(), None);
        assert_eq!(queue.try_peek(), None);

        let shared: ConcurrentUniqueQueue<u8> = ConcurrentUniqueQueue::default();
        assert_eq!(shared.dequeue(), Err(QueueError::Empty));
        assert_eq!(shared.peek(), Err(QueueError::Empty));
        assert_eq!(shared.try_dequeue(), None);
        assert_eq!(shared.try_peek(), None);
    }

    #[test]
    fn test_empty_error_display() {
        assert_eq!(QueueError::Empty.to_string(), "Queue is empty");
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let mut queue: UniqueQueue<i64> = UniqueQueue::new();
        queue.clear();
        assert!(queue.is_empty());

        let shared: ConcurrentUniqueQueue<i64> = ConcurrentUniqueQueue::new();
        shared.clear();
        assert!(shared.is_empty());
        assert!(shared.drain_all().is_empty());
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let queue = ConcurrentUniqueQueue::new();
        queue.enqueue_all([1, 2, 3]);

        let snapshot = queue.snapshot();
        queue.dequeue().unwrap();
        queue.enqueue(4);
        queue.clear();

        assert_eq!(snapshot.to_vec(), vec![1, 2, 3]);
        assert_eq!(snapshot.len(), 3);
        // Restartable: a second pass sees the same elements
        assert_eq!(snapshot.iter().sum::<i32>(), 6);
        assert_eq!(snapshot.clone().into_iter().count(), 3);
    }

    #[test]
    fn test_borrowing_iteration_in_fifo_order() {
        let queue: UniqueQueue<_> = ["q", "w", "e", "w"].into_iter().collect();

        let seen: Vec<&&str> = (&queue).into_iter().collect();
        assert_eq!(seen, vec![&"q", &"w", &"e"]);
        assert_eq!(queue.iter().count(), 3);
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut queue = UniqueQueue::new();
        queue.enqueue(1);

        queue.extend(vec![1, 2, 2, 3]);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.enqueue_all(vec![3, 4]), 1);
    }

    /// Case-insensitive key: equality and hashing both ignore ASCII case
    #[derive(Debug, Clone, Eq)]
    struct CaseInsensitive(String);

    impl PartialEq for CaseInsensitive {
        fn eq(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(&other.0)
        }
    }

    impl Hash for CaseInsensitive {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.to_ascii_lowercase().hash(state);
        }
    }

    #[test]
    fn test_caller_supplied_equality() {
        let mut queue = UniqueQueue::new();

        assert!(queue.enqueue(CaseInsensitive("Build".to_string())));
        assert!(!queue.enqueue(CaseInsensitive("BUILD".to_string())));
        assert!(queue.contains(&CaseInsensitive("build".to_string())));

        // The first admitted representation is the one that stays queued
        assert_eq!(queue.dequeue().unwrap().0, "Build");
    }

    #[test]
    fn test_stats_track_dequeues_not_clears() {
        let mut queue = UniqueQueue::new();
        queue.enqueue_all(0..5);
        queue.dequeue().unwrap();
        queue.try_dequeue();
        queue.clear();

        let stats = queue.stats();
        assert_eq!(stats.admitted, 5);
        assert_eq!(stats.dequeued, 2);
        assert_eq!(stats.len, 0);
    }
}
