//! Core launcher model.
//! Pure state + reducer; timers live in `state::launcher`.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    Fired,
    Cooldown,
    Reloading,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Ready => "READY",
            Status::Fired => "FIRED",
            Status::Cooldown => "COOLDOWN",
            Status::Reloading => "RELOADING",
        }
    }

    /// Badge background for the status pill.
    pub fn color(self) -> &'static str {
        match self {
            Status::Ready => "#2ea043",
            Status::Fired => "#f0883e",
            Status::Cooldown => "#58a6ff",
            Status::Reloading => "#6e7681",
        }
    }
}

/// Magnitudes the reducer applies. Copied from `LauncherConfig` at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub max_ammo: u32,
    pub max_cooldown: u32,
    /// Cooldown set by a successful fire.
    pub fire_cooldown: u32,
    /// Cooldown set by a detonation.
    pub detonate_cooldown: u32,
    /// Amount removed from the cooldown per tick.
    pub tick_step: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_ammo: 4,
            max_cooldown: 100,
            fire_cooldown: 30,
            detonate_cooldown: 70,
            tick_step: 2,
        }
    }
}

/// `max_ammo` and `max_cooldown` are the live bounds; the reducer reads only
/// these fields. `rules` seeds them in `new` and supplies the per-action
/// magnitudes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherState {
    /// Remaining rockets, 0..=max_ammo.
    pub ammo: u32,
    pub max_ammo: u32,
    /// Decaying counter gating the return to Ready, 0..=max_cooldown.
    pub cooldown: u32,
    pub max_cooldown: u32,
    pub status: Status,
    /// A fired rocket is in flight and can be detonated.
    pub projectile_active: bool,
    pub rules: Rules,
}

impl Default for LauncherState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl LauncherState {
    pub fn new(rules: Rules) -> Self {
        Self {
            ammo: rules.max_ammo,
            max_ammo: rules.max_ammo,
            cooldown: 0,
            max_cooldown: rules.max_cooldown,
            status: Status::Ready,
            projectile_active: false,
            rules,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.ammo > 0 && self.status == Status::Ready
    }

    pub fn can_detonate(&self) -> bool {
        self.projectile_active
    }

    /// Whether a reload would have any effect.
    pub fn can_reload(&self) -> bool {
        self.ammo != self.max_ammo
    }

    /// Reload button state. Stricter than `can_reload`: the button greys out
    /// while a reload is already pending.
    pub fn reload_enabled(&self) -> bool {
        self.can_reload() && self.status != Status::Reloading
    }

    /// Progress bar fill, 0..=100, full when the cooldown is spent.
    pub fn charge_percent(&self) -> u32 {
        if self.max_cooldown == 0 {
            return 100;
        }
        let remaining = self.cooldown.min(self.max_cooldown) as u64;
        let max = self.max_cooldown as u64;
        ((max - remaining) * 100 / max) as u32
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LauncherAction {
    Fire,
    Detonate,
    /// Immediate half of a reload; the controller schedules `ReloadComplete`.
    Reload,
    /// Periodic cooldown decay.
    Tick,
    ReloadComplete,
}

impl Reducible for LauncherState {
    type Action = LauncherAction;

    /// Returns `self` untouched (same `Rc`) when the action's precondition fails.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LauncherAction::*;
        let mut new = (*self).clone();
        match action {
            Fire => {
                if !self.can_fire() { return self; }
                new.ammo -= 1;
                new.status = Status::Fired;
                new.projectile_active = true;
                new.cooldown = new.rules.fire_cooldown.min(new.max_cooldown);
            }
            Detonate => {
                if !self.can_detonate() { return self; }
                new.projectile_active = false;
                new.status = Status::Cooldown;
                new.cooldown = new.rules.detonate_cooldown.min(new.max_cooldown);
            }
            Reload => {
                if !self.can_reload() { return self; }
                new.status = Status::Reloading;
                new.cooldown = new.max_cooldown;
            }
            Tick => {
                if self.cooldown == 0 { return self; }
                new.cooldown = new.cooldown.saturating_sub(new.rules.tick_step);
                if new.cooldown == 0 && new.status != Status::Reloading {
                    new.status = Status::Ready;
                }
            }
            ReloadComplete => {
                new.ammo = new.max_ammo;
                new.status = Status::Ready;
                new.cooldown = 0;
            }
        }
        Rc::new(new)
    }
}
