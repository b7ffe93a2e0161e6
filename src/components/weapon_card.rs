use super::{ammo_counter::AmmoCounter, status_bar::StatusBar};
use crate::state::LauncherView;
use yew::prelude::*;

pub const LAUNCHER_IMAGE: &str = "assets/custom-launcher.png";
pub const EXPLOSION_IMAGE: &str = "assets/explosion-effect.png";

#[derive(Properties, PartialEq, Clone)]
pub struct WeaponCardProps {
    pub view: LauncherView,
    pub on_fire: Callback<()>,
    pub on_detonate: Callback<()>,
    pub on_reload: Callback<()>,
}

fn action_button(label: &'static str, icon: &'static str, color: &'static str, disabled: bool, cb: &Callback<()>) -> Html {
    let onclick = {
        let cb = cb.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let style = format!(
        "display:flex; flex-direction:column; align-items:center; justify-content:center; gap:4px; height:64px; font-weight:700; border-radius:8px; border:1px solid {c}; background:{bg}; color:#fff; cursor:{cur}; opacity:{op};",
        c = color,
        bg = if disabled { "#21262d" } else { color },
        cur = if disabled { "not-allowed" } else { "pointer" },
        op = if disabled { "0.5" } else { "1" },
    );
    html! {
        <button {onclick} {disabled} {style}>
            <span style="font-size:18px;">{ icon }</span>
            { label }
        </button>
    }
}

#[function_component]
pub fn WeaponCard(props: &WeaponCardProps) -> Html {
    let s = &props.view.state;
    html! {
        <div style="background:linear-gradient(160deg,#161b22,#0d1117); border:1px solid #30363d; border-radius:12px; padding:32px; position:relative; overflow:hidden;">
            <div style="text-align:center; display:flex; flex-direction:column; gap:24px;">
                <div style="position:relative;">
                    <img src={LAUNCHER_IMAGE} alt="Custom Launcher" style="width:256px; height:256px; margin:0 auto; object-fit:contain; filter:drop-shadow(0 12px 24px rgba(0,0,0,0.6));" />
                    { if props.view.explosion {
                        html!{ <img src={EXPLOSION_IMAGE} alt="Explosion Effect" class="pulse" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); width:384px; height:384px; object-fit:contain;" /> }
                    } else { html!{} } }
                    { if s.projectile_active {
                        html!{ <div class="bounce" style="position:absolute; top:16px; right:16px;"><div style="width:16px; height:16px; border-radius:50%; background:#f0883e; box-shadow:0 0 12px #f0883e;"></div></div> }
                    } else { html!{} } }
                </div>
                <StatusBar status={s.status} charge={s.charge_percent()} />
                <AmmoCounter ammo={s.ammo} max_ammo={s.max_ammo} />
                <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:12px;">
                    { action_button("FIRE", "🚀", "#da3633", !s.can_fire(), &props.on_fire) }
                    { action_button("DETONATE", "🎯", "#8957e5", !s.can_detonate(), &props.on_detonate) }
                    { action_button("RELOAD", "↻", "#30363d", !s.reload_enabled(), &props.on_reload) }
                </div>
            </div>
        </div>
    }
}
