// One-shot timers with cancel-on-drop handles.

use crate::util::cwarn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task. Dropping it cancels the task if still pending.
pub struct Timeout {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Timeout {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle for a task that was never armed.
    pub fn inert() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler: 'static {
    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout;
}

/// `window.setTimeout` backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        let Some(window) = web_sys::window() else {
            cwarn("no window; timer dropped");
            return Timeout::inert();
        };
        let closure = Closure::once(move || task());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(id) => Timeout::new(move || {
                window.clear_timeout_with_handle(id);
                drop(closure);
            }),
            Err(_) => {
                cwarn("setTimeout failed; timer dropped");
                Timeout::inert()
            }
        }
    }
}

/// Virtual clock for tests: tasks run only inside `advance`, in due order.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: std::rc::Rc<std::cell::RefCell<Clock>>,
}

#[cfg(test)]
#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

#[cfg(test)]
struct Pending {
    id: u64,
    due: u64,
    task: Task,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move time forward, running every task due on the way. Tasks may
    /// schedule or cancel others.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut c = self.clock.borrow_mut();
                let pos = c
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                match pos {
                    Some(i) => {
                        let p = c.pending.remove(i);
                        c.now = p.due;
                        Some(p.task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        let mut c = self.clock.borrow_mut();
        let id = c.next_id;
        c.next_id += 1;
        let due = c.now + delay_ms as u64;
        c.pending.push(Pending { id, due, task });
        let clock = std::rc::Rc::downgrade(&self.clock);
        Timeout::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_in_due_order() {
        let sched = ManualScheduler::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (delay, tag) in [(30u32, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            handles.push(sched.schedule(delay, Box::new(move || log.borrow_mut().push(tag))));
        }
        sched.advance(15);
        assert_eq!(*log.borrow(), vec!["a"]);
        sched.advance(15);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(sched.now(), 30);
    }

    #[test]
    fn dropping_handle_cancels() {
        let sched = ManualScheduler::default();
        let hit = Rc::new(RefCell::new(false));
        let h = {
            let hit = hit.clone();
            sched.schedule(5, Box::new(move || *hit.borrow_mut() = true))
        };
        drop(h);
        assert_eq!(sched.pending(), 0);
        sched.advance(10);
        assert!(!*hit.borrow());
    }

    #[test]
    fn task_can_reschedule() {
        let sched = ManualScheduler::default();
        let count = Rc::new(RefCell::new(0));
        let slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        fn arm(sched: ManualScheduler, count: Rc<RefCell<u32>>, slot: Rc<RefCell<Option<Timeout>>>) {
            let (s2, c2, sl2) = (sched.clone(), count.clone(), slot.clone());
            let t = sched.schedule(10, Box::new(move || {
                *c2.borrow_mut() += 1;
                if *c2.borrow() < 3 {
                    arm(s2, c2, sl2);
                }
            }));
            // replace; the old handle's task already ran so cancelling it is harmless
            let _old = slot.borrow_mut().replace(t);
        }

        arm(sched.clone(), count.clone(), slot.clone());
        sched.advance(100);
        assert_eq!(*count.borrow(), 3);
        assert_eq!(sched.now(), 100);
    }
}
