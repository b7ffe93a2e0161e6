//! Launcher tuning. Defaults match the shipped weapon; an optional JSON
//! override is read (never written) from localStorage.

use crate::model::Rules;
use crate::util::{clog, cwarn};
use serde::Deserialize;

pub const CONFIG_STORAGE_KEY: &str = "launcher_config";
pub const AMMO_LIMIT: u32 = 64;
pub const COOLDOWN_LIMIT: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub max_ammo: u32,
    pub max_cooldown: u32,
    pub fire_cooldown: u32,
    pub detonate_cooldown: u32,
    pub tick_step: u32,
    /// Delay between cooldown ticks.
    pub tick_period_ms: u32,
    /// Time from reload start to a full magazine.
    pub reload_delay_ms: u32,
    /// How long the explosion overlay stays up.
    pub flash_ms: u32,
    pub debug_log: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            max_ammo: rules.max_ammo,
            max_cooldown: rules.max_cooldown,
            fire_cooldown: rules.fire_cooldown,
            detonate_cooldown: rules.detonate_cooldown,
            tick_step: rules.tick_step,
            tick_period_ms: 50,
            reload_delay_ms: 2000,
            flash_ms: 1000,
            debug_log: false,
        }
    }
}

impl LauncherConfig {
    /// Load from localStorage, falling back to defaults on any failure.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        let cfg = match raw {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        };
        crate::util::set_debug_logging(cfg.debug_log);
        clog(&format!("config: {:?}", cfg));
        cfg
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<LauncherConfig>(raw) {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                cwarn(&format!("ignoring {}: {}", CONFIG_STORAGE_KEY, e));
                Self::default()
            }
        }
    }

    pub fn sanitized(mut self) -> Self {
        self.max_ammo = self.max_ammo.clamp(1, AMMO_LIMIT);
        self.max_cooldown = self.max_cooldown.clamp(1, COOLDOWN_LIMIT);
        self.fire_cooldown = self.fire_cooldown.min(self.max_cooldown);
        self.detonate_cooldown = self.detonate_cooldown.min(self.max_cooldown);
        self.tick_step = self.tick_step.max(1);
        self.tick_period_ms = self.tick_period_ms.max(1);
        self
    }

    pub fn rules(&self) -> Rules {
        Rules {
            max_ammo: self.max_ammo,
            max_cooldown: self.max_cooldown,
            fire_cooldown: self.fire_cooldown,
            detonate_cooldown: self.detonate_cooldown,
            tick_step: self.tick_step,
        }
    }
}
