//! Short-term memory for Tabu Search.

use std::collections::{HashMap, VecDeque};

use crate::tour::Tour;

/// Bounded FIFO record of recently accepted tours.
///
/// Membership is whole-tour: a tour is tabu if an identical tour was
/// accepted within the last `capacity` acceptances. The same tour may be
/// recorded more than once; it stays tabu until its last copy is evicted.
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<Tour>,
    counts: HashMap<Tour, usize>,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` tours.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Maximum number of remembered tours.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of remembered tours, duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `tour` is currently tabu.
    pub fn contains(&self, tour: &Tour) -> bool {
        self.counts.contains_key(tour)
    }

    /// Records `tour`, evicting and returning the oldest entry once full.
    pub fn push(&mut self, tour: Tour) -> Option<Tour> {
        if self.capacity == 0 {
            return Some(tour);
        }

        let evicted = if self.queue.len() >= self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            if let Some(count) = self.counts.get_mut(old) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(old);
                }
            }
        }

        *self.counts.entry(tour.clone()).or_insert(0) += 1;
        self.queue.push_back(tour);
        evicted
    }
}
