use std::collections::VecDeque;

/// Fixed-capacity series of recent readings, oldest evicted first.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            capacity,
        }
    }

    /// Append `value`, dropping the oldest sample once over capacity.
    pub fn push(&mut self, value: f32) {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// `(index, value)` pairs ready to be plotted, oldest at x = 0.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_below_capacity_keeps_everything() {
        let mut history = RollingHistory::new(50);
        history.push(17.5);
        history.push(20.0);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![17.5, 20.0]);
        assert_eq!(history.latest(), Some(20.0));
    }

    #[test]
    fn full_history_evicts_exactly_the_oldest() {
        let mut history = RollingHistory::new(50);
        for v in 0..50 {
            history.push(v as f32);
        }
        let before: Vec<f32> = history.iter().collect();

        history.push(99.0);

        let after: Vec<f32> = history.iter().collect();
        assert_eq!(after.len(), 50);
        assert_eq!(&after[..49], &before[1..]);
        assert_eq!(after[49], 99.0);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut history = RollingHistory::new(3);
        for v in 0..10 {
            history.push(v as f32);
            assert!(history.len() <= 3);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn points_are_indexed_from_zero() {
        let mut history = RollingHistory::new(4);
        history.push(10.0);
        history.push(12.5);
        assert_eq!(history.points(), vec![(0.0, 10.0), (1.0, 12.5)]);
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut history = RollingHistory::new(usize::MAX);
        history.push(1.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), usize::MAX);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut history = RollingHistory::new(5);
        history.push(1.0);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 5);
        assert_eq!(history.latest(), None);
    }
}
