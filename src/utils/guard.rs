use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag tying spawned async work to a component
/// lifecycle.
///
/// Each task spawned by an effect holds a clone; the effect cleanup calls
/// [`revoke`](Self::revoke), after which [`run_if_alive`](Self::run_if_alive)
/// suppresses the callback. This keeps a pending poll timer or an in-flight
/// fetch from dispatching against an unmounted view.
#[derive(Clone, Debug)]
pub struct LifecycleGuard {
    alive: Rc<Cell<bool>>,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Marks the lifecycle as torn down. All clones observe the change.
    pub fn revoke(&self) {
        self.alive.set(false);
    }

    /// Runs `f` only while the guard has not been revoked.
    pub fn run_if_alive<F: FnOnce()>(&self, f: F) {
        if self.is_alive() {
            f();
        }
    }
}

impl Default for LifecycleGuard {
    fn default() -> Self {
        Self::new()
    }
}
