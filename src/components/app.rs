use super::{mvp_panel::{MvpLayer, MvpPanel}, tech_specs::TechSpecs, weapon_card::WeaponCard};
use crate::config::LauncherConfig;
use crate::state::{BrowserScheduler, Launcher, LauncherView};
use yew::prelude::*;

#[function_component(WeaponShowcase)]
pub fn weapon_showcase() -> Html {
    let config = use_state(LauncherConfig::load);
    let view = {
        let config = (*config).clone();
        use_state(move || LauncherView::new(&config))
    };
    let launcher = use_mut_ref(|| None::<Launcher<BrowserScheduler>>);
    let layer = use_state(|| MvpLayer::Presenter);

    // Controller lives for the component's lifetime; dropping it cancels its timers.
    {
        let launcher = launcher.clone();
        let setter = view.setter();
        let config = (*config).clone();
        use_effect_with((), move |_| {
            let l = Launcher::new(config, BrowserScheduler, move |v| setter.set(v));
            *launcher.borrow_mut() = Some(l);
            move || {
                let _ = launcher.borrow_mut().take();
            }
        });
    }

    let on_fire = {
        let launcher = launcher.clone();
        Callback::from(move |_| {
            if let Some(l) = launcher.borrow().as_ref() {
                l.fire();
            }
        })
    };
    let on_detonate = {
        let launcher = launcher.clone();
        Callback::from(move |_| {
            if let Some(l) = launcher.borrow().as_ref() {
                l.detonate();
            }
        })
    };
    let on_reload = {
        let launcher = launcher.clone();
        Callback::from(move |_| {
            if let Some(l) = launcher.borrow().as_ref() {
                l.reload();
            }
        })
    };
    let on_select_layer = {
        let layer = layer.clone();
        Callback::from(move |l: MvpLayer| layer.set(l))
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; padding:24px; font-family:system-ui, sans-serif;">
            <div style="max-width:1200px; margin:0 auto; display:flex; flex-direction:column; gap:32px;">
                <div style="text-align:center; display:flex; flex-direction:column; gap:12px; align-items:center;">
                    <h1 style="margin:0; font-size:44px; font-weight:700; text-shadow:0 0 12px rgba(88,166,255,0.6);">{"Custom Launcher MVP"}</h1>
                    <p style="margin:0; font-size:18px; color:#8b949e;">{"Fortnite Chapter 2 Season 2 • Remote Detonation System"}</p>
                    <span style="background:linear-gradient(90deg,#d4af37,#f0883e); color:#0d1117; font-weight:700; padding:2px 10px; border-radius:999px; font-size:12px;">{"Mythic Weapon"}</span>
                </div>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(420px, 1fr)); gap:32px;">
                    <WeaponCard
                        view={(*view).clone()}
                        on_fire={on_fire}
                        on_detonate={on_detonate}
                        on_reload={on_reload}
                    />
                    <MvpPanel
                        layer={*layer}
                        on_select={on_select_layer}
                        ammo={view.state.ammo}
                        max_ammo={view.state.max_ammo}
                        status={view.state.status}
                    />
                </div>
                <TechSpecs />
            </div>
        </div>
    }
}
