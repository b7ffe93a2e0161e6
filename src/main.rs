mod components;
mod config;
mod model;
mod state;
mod util;

use components::WeaponShowcase;

fn main() {
    yew::Renderer::<WeaponShowcase>::new().render();
}
