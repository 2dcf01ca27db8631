use std::collections::VecDeque;

/// Keys ordered by last access: front is the most recently used, back the
/// least recently used.
#[derive(Debug)]
pub(crate) struct RecencyList<K> {
    order: VecDeque<K>,
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        RecencyList {
            order: VecDeque::new(),
        }
    }
}

impl<K: Eq + Clone> RecencyList<K> {
    /// Moves `key` to the front, adding it if it is not tracked yet.
    pub(crate) fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    pub(crate) fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    pub(crate) fn most_recent(&self) -> Option<&K> {
        self.order.front()
    }

    pub(crate) fn least_recent(&self) -> Option<&K> {
        self.order.back()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
