// Launcher controller: owns the state record and every timer acting on it.

use super::scheduler::{Scheduler, Timeout};
use crate::config::LauncherConfig;
use crate::model::{LauncherAction, LauncherState};
use crate::util::clog;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Reducible;

/// What the view renders: the state record plus the detonation flash,
/// which is not part of the state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct LauncherView {
    pub state: Rc<LauncherState>,
    pub explosion: bool,
}

impl LauncherView {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            state: Rc::new(LauncherState::new(config.rules())),
            explosion: false,
        }
    }
}

type Listener = Rc<dyn Fn(LauncherView)>;

struct Inner<S: Scheduler> {
    state: Rc<LauncherState>,
    explosion: bool,
    config: LauncherConfig,
    scheduler: S,
    tick_timer: Option<Timeout>,
    reload_timer: Option<Timeout>,
    flash_timer: Option<Timeout>,
    // A timer's closure must outlive its own invocation; it parks here
    // until the next timer fires.
    retired: Option<Timeout>,
    on_change: Listener,
}

impl<S: Scheduler> Inner<S> {
    fn view(&self) -> LauncherView {
        LauncherView {
            state: self.state.clone(),
            explosion: self.explosion,
        }
    }

    fn cancel_all(&mut self) {
        self.tick_timer = None;
        self.reload_timer = None;
        self.flash_timer = None;
        self.retired = None;
    }
}

pub struct Launcher<S: Scheduler> {
    inner: Rc<RefCell<Inner<S>>>,
}

enum Slot {
    Tick,
    Reload,
    Flash,
}

impl<S: Scheduler> Launcher<S> {
    pub fn new(config: LauncherConfig, scheduler: S, on_change: impl Fn(LauncherView) + 'static) -> Self {
        let state = Rc::new(LauncherState::new(config.rules()));
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                explosion: false,
                config,
                scheduler,
                tick_timer: None,
                reload_timer: None,
                flash_timer: None,
                retired: None,
                on_change: Rc::new(on_change),
            })),
        }
    }

    #[cfg(test)]
    fn view(&self) -> LauncherView {
        self.inner.borrow().view()
    }

    pub fn fire(&self) {
        Self::apply(&self.inner, LauncherAction::Fire);
    }

    pub fn detonate(&self) {
        if Self::apply(&self.inner, LauncherAction::Detonate) {
            Self::raise_explosion(&self.inner);
        }
    }

    pub fn reload(&self) {
        if Self::apply(&self.inner, LauncherAction::Reload) {
            Self::arm(&self.inner, Slot::Reload);
        }
    }

    /// Reduce and, if the state changed, re-arm the tick chain and notify.
    /// Returns whether the action took effect.
    fn apply(rc: &Rc<RefCell<Inner<S>>>, action: LauncherAction) -> bool {
        let (view, listener) = {
            let mut inner = rc.borrow_mut();
            let prev = inner.state.clone();
            let next = prev.clone().reduce(action);
            if Rc::ptr_eq(&prev, &next) {
                return false;
            }
            clog(&format!(
                "{:?}: ammo {} -> {}, cooldown {} -> {}, {:?} -> {:?}",
                action, prev.ammo, next.ammo, prev.cooldown, next.cooldown, prev.status, next.status
            ));
            inner.state = next;
            (inner.view(), inner.on_change.clone())
        };
        // Every replacement restarts the tick period.
        Self::arm(rc, Slot::Tick);
        listener(view);
        true
    }

    fn raise_explosion(rc: &Rc<RefCell<Inner<S>>>) {
        let (view, listener) = {
            let mut inner = rc.borrow_mut();
            inner.explosion = true;
            (inner.view(), inner.on_change.clone())
        };
        Self::arm(rc, Slot::Flash);
        listener(view);
    }

    fn arm(rc: &Rc<RefCell<Inner<S>>>, slot: Slot) {
        let weak = Rc::downgrade(rc);
        let mut inner = rc.borrow_mut();
        match slot {
            Slot::Tick => {
                inner.tick_timer = None;
                if inner.state.cooldown > 0 {
                    let delay = inner.config.tick_period_ms;
                    let t = inner.scheduler.schedule(delay, Box::new(move || Self::on_tick(weak)));
                    inner.tick_timer = Some(t);
                }
            }
            Slot::Reload => {
                // A newer reload supersedes the pending completion.
                inner.reload_timer = None;
                let delay = inner.config.reload_delay_ms;
                let t = inner.scheduler.schedule(delay, Box::new(move || Self::on_reload_done(weak)));
                inner.reload_timer = Some(t);
            }
            Slot::Flash => {
                inner.flash_timer = None;
                let delay = inner.config.flash_ms;
                let t = inner.scheduler.schedule(delay, Box::new(move || Self::on_flash_done(weak)));
                inner.flash_timer = Some(t);
            }
        }
    }

    fn on_tick(weak: Weak<RefCell<Inner<S>>>) {
        let Some(rc) = weak.upgrade() else { return };
        {
            let mut inner = rc.borrow_mut();
            inner.retired = inner.tick_timer.take();
        }
        if !Self::apply(&rc, LauncherAction::Tick) {
            clog("tick with nothing to cool down");
        }
    }

    fn on_reload_done(weak: Weak<RefCell<Inner<S>>>) {
        let Some(rc) = weak.upgrade() else { return };
        {
            let mut inner = rc.borrow_mut();
            inner.retired = inner.reload_timer.take();
        }
        Self::apply(&rc, LauncherAction::ReloadComplete);
    }

    fn on_flash_done(weak: Weak<RefCell<Inner<S>>>) {
        let Some(rc) = weak.upgrade() else { return };
        let (view, listener) = {
            let mut inner = rc.borrow_mut();
            inner.retired = inner.flash_timer.take();
            inner.explosion = false;
            (inner.view(), inner.on_change.clone())
        };
        listener(view);
    }
}

impl<S: Scheduler> Drop for Launcher<S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.cancel_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::state::scheduler::ManualScheduler;

    fn setup() -> (Launcher<ManualScheduler>, ManualScheduler, Rc<RefCell<Vec<LauncherView>>>) {
        let sched = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let launcher = Launcher::new(LauncherConfig::default(), sched.clone(), move |v| sink.borrow_mut().push(v));
        (launcher, sched, seen)
    }

    #[test]
    fn fire_cools_down_to_ready() {
        let (l, sched, _) = setup();
        l.fire();
        assert_eq!(l.view().state.status, Status::Fired);
        assert_eq!(sched.pending(), 1);

        sched.advance(700);
        assert_eq!(l.view().state.cooldown, 2);
        assert_eq!(l.view().state.status, Status::Fired);

        sched.advance(50);
        let s = l.view().state;
        assert_eq!(s.cooldown, 0);
        assert_eq!(s.status, Status::Ready);
        assert_eq!(sched.pending(), 0, "tick chain stops at zero");
    }

    #[test]
    fn detonate_restarts_tick_chain_and_flashes() {
        let (l, sched, _) = setup();
        l.fire();
        sched.advance(100);
        assert_eq!(l.view().state.cooldown, 26);

        l.detonate();
        let v = l.view();
        assert!(v.explosion);
        assert_eq!(v.state.cooldown, 70);
        assert_eq!(v.state.status, Status::Cooldown);
        assert!(!v.state.projectile_active);

        sched.advance(999);
        assert!(l.view().explosion);
        sched.advance(1);
        assert!(!l.view().explosion);

        // 35 ticks of 50 after the detonation at t=100
        sched.advance(700);
        assert_eq!(l.view().state.status, Status::Cooldown);
        sched.advance(50);
        assert_eq!(l.view().state.status, Status::Ready);
        assert_eq!(sched.now(), 1850);
    }

    #[test]
    fn reload_completes_after_exactly_two_seconds() {
        let (l, sched, _) = setup();
        l.fire();
        sched.advance(1000);
        assert_eq!(l.view().state.status, Status::Ready);

        l.reload();
        assert_eq!(l.view().state.status, Status::Reloading);
        assert_eq!(l.view().state.cooldown, 100);

        sched.advance(1999);
        let mid = l.view().state;
        assert_eq!(mid.ammo, 3);
        assert_eq!(mid.status, Status::Reloading);

        sched.advance(1);
        let done = l.view().state;
        assert_eq!(done.ammo, 4);
        assert_eq!(done.status, Status::Ready);
        assert_eq!(done.cooldown, 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn second_reload_supersedes_first() {
        let (l, sched, _) = setup();
        l.fire();
        sched.advance(1000);
        l.reload();
        sched.advance(500);
        l.reload();
        sched.advance(1999);
        assert_eq!(l.view().state.ammo, 3);
        sched.advance(1);
        assert_eq!(l.view().state.ammo, 4);
    }

    #[test]
    fn no_ops_do_not_notify() {
        let (l, sched, seen) = setup();
        l.detonate();
        l.reload();
        sched.advance(5000);
        assert!(seen.borrow().is_empty());
        assert_eq!(sched.pending(), 0);

        l.fire();
        l.fire();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn every_change_is_published() {
        let (l, sched, seen) = setup();
        l.fire();
        sched.advance(750);
        // fire + 15 ticks
        assert_eq!(seen.borrow().len(), 16);
        let last = seen.borrow().last().cloned().map(|v| v.state.status);
        assert_eq!(last, Some(Status::Ready));
    }

    #[test]
    fn teardown_cancels_pending_timers() {
        let (l, sched, seen) = setup();
        l.fire();
        l.detonate();
        l.reload();
        assert_eq!(sched.pending(), 3);
        let before = seen.borrow().len();

        drop(l);
        assert_eq!(sched.pending(), 0);
        sched.advance(5000);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn stale_callback_after_teardown_is_ignored() {
        let (l, sched, seen) = setup();
        l.fire();
        l.detonate();
        l.reload();
        let before = seen.borrow().len();
        let weak = Rc::downgrade(&l.inner);
        drop(l);
        assert!(weak.upgrade().is_none());

        // callbacks that slipped past cancellation find nothing to mutate
        Launcher::<ManualScheduler>::on_tick(weak.clone());
        Launcher::<ManualScheduler>::on_reload_done(weak.clone());
        Launcher::<ManualScheduler>::on_flash_done(weak);
        sched.advance(5000);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn second_detonation_restarts_flash() {
        let sched = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let cfg = LauncherConfig { tick_period_ms: 1, ..LauncherConfig::default() };
        let l = Launcher::new(cfg, sched.clone(), move |v: LauncherView| sink.borrow_mut().push(v.explosion));

        l.fire();
        l.detonate();
        // 35 ticks of 1ms drain the detonation cooldown
        sched.advance(35);
        assert_eq!(l.view().state.status, Status::Ready);
        assert!(l.view().explosion);

        l.fire();
        l.detonate();
        sched.advance(999);
        assert!(l.view().explosion, "flash cleared on the first detonation's schedule");
        sched.advance(1);
        assert_eq!(sched.now(), 1035);
        assert!(!l.view().explosion);
        assert_eq!(seen.borrow().last(), Some(&false));
    }

    #[test]
    fn empty_magazine_then_reload() {
        let (l, sched, _) = setup();
        for _ in 0..4 {
            l.fire();
            l.detonate();
            sched.advance(1750);
            assert_eq!(l.view().state.status, Status::Ready);
        }
        assert_eq!(l.view().state.ammo, 0);
        l.fire();
        assert_eq!(l.view().state.ammo, 0);
        assert!(!l.view().state.projectile_active);

        l.reload();
        sched.advance(2000);
        assert_eq!(l.view().state.ammo, 4);
    }

    #[test]
    fn custom_timing_from_config() {
        let sched = ManualScheduler::default();
        let cfg = LauncherConfig { reload_delay_ms: 300, tick_period_ms: 10, ..LauncherConfig::default() };
        let l = Launcher::new(cfg, sched.clone(), |_| {});
        l.fire();
        sched.advance(150);
        assert_eq!(l.view().state.status, Status::Ready);
        l.reload();
        sched.advance(300);
        assert_eq!(l.view().state.ammo, 4);
    }
}
