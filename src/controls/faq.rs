//! FAQ accordion: one independent open/closed fold per entry.
//!
//! There is deliberately no mutual exclusivity; any number of answers may be
//! open at once.

#[derive(Debug)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one entry. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = !*flag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_toggle_independently() {
        let mut acc = Accordion::new(2);
        acc.toggle(0);
        assert!(acc.is_open(0));
        assert!(!acc.is_open(1));
        acc.toggle(1);
        assert!(acc.is_open(0));
        assert!(acc.is_open(1));
    }

    #[test]
    fn test_double_toggle_returns_to_closed() {
        let mut acc = Accordion::new(1);
        acc.toggle(0);
        acc.toggle(0);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn test_out_of_range_toggle_ignored() {
        let mut acc = Accordion::new(1);
        acc.toggle(5);
        assert!(!acc.is_open(5));
    }
}
