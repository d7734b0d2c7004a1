use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Counts drops of live values. The default (vacated-slot) state carries no
/// counter, so storage churn never inflates the count.
#[derive(Default)]
struct Tracked(Option<Rc<Cell<u32>>>);

impl Tracked {
    fn new(counter: &Rc<Cell<u32>>) -> Self {
        Self(Some(Rc::clone(counter)))
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.0 {
            counter.set(counter.get() + 1);
        }
    }
}
