pub mod launcher;
pub mod scheduler;

pub use launcher::{Launcher, LauncherView};
pub use scheduler::BrowserScheduler;
