//! Fixed-capacity FIFO queue
//!
//! Retains the most recent `capacity` elements pushed into it, oldest first.
//! Backed by a ring of slots so eviction is O(1) and never reallocates.

use crate::config::ConfigError;

/// Bounded FIFO queue that evicts its oldest element on overflow
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    /// Index of the oldest element
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` elements
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            head: 0,
            len: 0,
        })
    }

    /// Append `value` as the newest element
    ///
    /// When the queue is already full the oldest element is removed in the
    /// same step and handed back, so `len` never exceeds `capacity`.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        self.insert_back(value).0
    }

    /// Append `value` like [`push_back`](Self::push_back), dropping any
    /// evicted element, and borrow the stored value
    pub fn push_back_ref(&mut self, value: T) -> &T {
        self.insert_back(value).1
    }

    fn insert_back(&mut self, value: T) -> (Option<T>, &T) {
        let evicted = if self.is_full() {
            self.pop_front()
        } else {
            None
        };

        let tail = (self.head + self.len) % self.capacity();
        self.len += 1;

        let stored: &T = self.slots[tail].insert(value);
        (evicted, stored)
    }

    /// Remove and return the oldest element
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.slots[self.head].take();
        self.len -= 1;
        self.head = if self.len == 0 {
            0
        } else {
            (self.head + 1) % self.capacity()
        };

        value
    }

    /// Oldest element
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Newest element
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[(self.head + self.len - 1) % self.capacity()].as_ref()
    }

    /// Iterate oldest to newest without consuming the queue
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % self.capacity()].as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Copy out the current contents, oldest first
    ///
    /// The returned vector is detached from the queue: later pushes do not
    /// show up in it.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
