//! Generation-based debouncing for the catalog search box

use std::cell::Cell;
use std::rc::Rc;

/// Identifies one keystroke. Only the latest generation may fire.
pub type Generation = u64;

/// Debounces search input without owning a timer.
///
/// Every keystroke calls [`SearchDebouncer::bump`] and starts its own delay;
/// when the delay elapses the caller checks [`SearchDebouncer::is_current`]
/// and drops the search if a newer keystroke arrived meanwhile. Clones share
/// the same counter.
#[derive(Debug, Clone, Default)]
pub struct SearchDebouncer {
    latest: Rc<Cell<Generation>>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new keystroke and return its generation.
    pub fn bump(&self) -> Generation {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_keystroke_fires() {
        let debouncer = SearchDebouncer::new();

        let first = debouncer.bump();
        let second = debouncer.bump();

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let debouncer = SearchDebouncer::new();
        let handle = debouncer.clone();

        let generation = debouncer.bump();
        handle.bump();

        assert!(!debouncer.is_current(generation));
    }
}
