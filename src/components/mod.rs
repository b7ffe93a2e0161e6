pub mod ammo_counter;
pub mod app;
pub mod layer_card;
pub mod mvp_panel;
pub mod status_bar;
pub mod tech_specs;
pub mod weapon_card;

pub use app::WeaponShowcase;
