use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<A> {
    due: f64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap pops the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deterministic delay queue. Entries fire in due-time order, ties in
/// insertion order. Nothing can be cancelled once scheduled.
pub struct Timeline<A> {
    queue: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: f64, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due, seq, action });
    }

    /// Pops the earliest entry if it is due at or before `now`, together with
    /// the time it was due.
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, A)> {
        if self.queue.peek()?.due > now {
            return None;
        }
        self.queue.pop().map(|entry| (entry.due, entry.action))
    }

    pub fn next_due(&self) -> Option<f64> {
        self.queue.peek().map(|entry| entry.due)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<A>(timeline: &mut Timeline<A>, now: f64) -> Vec<A> {
        std::iter::from_fn(|| timeline.pop_due(now).map(|(_, a)| a)).collect()
    }

    #[test]
    fn fires_in_due_order_then_insertion_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(300.0, "c");
        timeline.schedule(0.0, "a");
        timeline.schedule(150.0, "b1");
        timeline.schedule(150.0, "b2");

        assert_eq!(drain(&mut timeline, 149.9), vec!["a"]);
        assert_eq!(drain(&mut timeline, 150.0), vec!["b1", "b2"]);
        assert_eq!(timeline.next_due(), Some(300.0));
        assert_eq!(timeline.pop_due(1000.0), Some((300.0, "c")));
        assert!(timeline.is_empty());
    }

    #[test]
    fn draining_an_empty_timeline_is_harmless() {
        let mut timeline: Timeline<u8> = Timeline::new();
        assert!(timeline.pop_due(10.0).is_none());
        assert!(timeline.is_empty());
    }
}
