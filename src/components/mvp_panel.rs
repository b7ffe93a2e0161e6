use super::layer_card::LayerCard;
use crate::model::Status;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MvpLayer {
    Model,
    View,
    Presenter,
}

impl MvpLayer {
    pub const ALL: [MvpLayer; 3] = [MvpLayer::Model, MvpLayer::View, MvpLayer::Presenter];

    pub fn tab_label(self) -> &'static str {
        match self {
            MvpLayer::Model => "Model",
            MvpLayer::View => "View",
            MvpLayer::Presenter => "Presenter",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            MvpLayer::Model => "🧠 Model Layer",
            MvpLayer::View => "👁️ View Layer",
            MvpLayer::Presenter => "🎮 Presenter Layer",
        }
    }
}

const CARD_COLORS: [&str; 4] = ["#58a6ff", "#2ea043", "#f0883e", "#f85149"];

/// Title/body pairs for a layer's four cards. The Model layer reports the
/// live magazine and status.
pub fn layer_cards(layer: MvpLayer, ammo: u32, max_ammo: u32, status: Status) -> [(&'static str, String); 4] {
    match layer {
        MvpLayer::Model => [
            ("Physics Engine", "Projectile trajectory, gravity effects, collision detection".into()),
            ("Damage System", "Splash radius: 5m, Direct: 110 DMG, Splash: 80 DMG".into()),
            ("State Management", format!("Ammo: {}/{}, Status: {}", ammo, max_ammo, status.label().to_lowercase())),
            ("Cooldown Logic", "Fire rate: 0.7s, Reload: 2.0s, Remote detonation".into()),
        ],
        MvpLayer::View => [
            ("3D Rendering", "Weapon model, projectile trail, muzzle flash".into()),
            ("VFX System", "Explosion particles, smoke trails, impact effects".into()),
            ("UI Elements", "Ammo counter, crosshair, cooldown indicators".into()),
            ("Audio System", "Fire sound, explosion audio, reload effects".into()),
        ],
        MvpLayer::Presenter => [
            ("Input Handler", "Mouse click to fire, right-click to detonate, R to reload".into()),
            ("Validation", "Check ammo availability, cooldown status, valid targets".into()),
            ("Coordination", "Updates Model state, triggers View animations".into()),
            ("Event System", "Damage events, kill confirmations, score updates".into()),
        ],
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MvpPanelProps {
    pub layer: MvpLayer,
    pub on_select: Callback<MvpLayer>,
    pub ammo: u32,
    pub max_ammo: u32,
    pub status: Status,
}

#[function_component]
pub fn MvpPanel(props: &MvpPanelProps) -> Html {
    let tabs = MvpLayer::ALL.iter().map(|&layer| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(layer));
        let active = layer == props.layer;
        let style = format!(
            "padding:4px 12px; font-size:13px; border-radius:6px; cursor:pointer; border:1px solid {}; background:{}; color:#fff;",
            if active { "#8957e5" } else { "#30363d" },
            if active { "#8957e5" } else { "#161b22" },
        );
        html! { <button {onclick} {style}>{ layer.tab_label() }</button> }
    });
    let cards = layer_cards(props.layer, props.ammo, props.max_ammo, props.status);
    html! {
        <div style="background:linear-gradient(160deg,#161b22,#0d1117); border:1px solid #30363d; border-radius:12px; padding:32px;">
            <div style="display:flex; flex-direction:column; gap:24px;">
                <div style="display:flex; gap:8px;">{ for tabs }</div>
                <div style="display:flex; flex-direction:column; gap:16px;">
                    <h3 style="margin:0; font-size:20px; font-weight:700;">{ props.layer.heading() }</h3>
                    <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:16px;">
                        { for cards.into_iter().zip(CARD_COLORS).map(|((title, body), color)| html!{
                            <LayerCard {title} {color} body={body} />
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
