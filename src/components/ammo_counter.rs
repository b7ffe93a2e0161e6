use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AmmoCounterProps {
    pub ammo: u32,
    pub max_ammo: u32,
}

#[function_component]
pub fn AmmoCounter(props: &AmmoCounterProps) -> Html {
    html! {
        <div style="display:flex; justify-content:center; gap:8px;">
            { for (0..props.max_ammo).map(|i| {
                let color = if i < props.ammo { "#f0883e" } else { "#30363d" };
                html!{ <div key={i} style={format!("width:12px; height:32px; border-radius:2px; background:{}; transition:background 200ms;", color)}></div> }
            }) }
        </div>
    }
}
