use yew::prelude::*;

const WEAPON_STATS: [&str; 5] = [
    "Damage: 110 (Direct) / 80 (Splash)",
    "Splash Radius: 5 meters",
    "Fire Rate: 0.7 seconds",
    "Reload Time: 2.0 seconds",
    "Magazine Size: 4 rockets",
];

const SPECIAL_FEATURES: [&str; 5] = [
    "Remote detonation capability",
    "Silent projectile flight",
    "Stealth tracking system",
    "Enhanced splash damage",
    "Mythic rarity effects",
];

const MVP_INTEGRATION: [&str; 5] = [
    "Model handles all game logic",
    "View manages visual feedback",
    "Presenter coordinates user input",
    "Separation of concerns",
    "Modular architecture",
];

fn spec_list(icon: &'static str, title: &'static str, color: &'static str, items: &[&'static str]) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            <h3 style={format!("margin:0; font-weight:600; color:{}; display:flex; align-items:center; gap:8px;", color)}>
                <span>{ icon }</span>{ title }
            </h3>
            <ul style="margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:4px; font-size:13px; color:#8b949e;">
                { for items.iter().map(|item| html!{ <li>{ format!("• {}", item) }</li> }) }
            </ul>
        </div>
    }
}

/// Static weapon sheet. Figures here are display text, not inputs to the model.
#[function_component]
pub fn TechSpecs() -> Html {
    html! {
        <div style="background:linear-gradient(160deg,#161b22,#0d1117); border:1px solid #30363d; border-radius:12px; padding:32px;">
            <h2 style="margin:0 0 24px 0; font-size:24px; font-weight:700;">{"Technical Specifications"}</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:24px;">
                { spec_list("⚡", "Weapon Stats", "#58a6ff", &WEAPON_STATS) }
                { spec_list("🎯", "Special Features", "#2ea043", &SPECIAL_FEATURES) }
                { spec_list("⚠", "MVP Integration", "#f0883e", &MVP_INTEGRATION) }
            </div>
        </div>
    }
}
