use crate::model::Status;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub status: Status,
    /// Cooldown progress, 0..=100.
    pub charge: u32,
}

#[function_component]
pub fn StatusBar(props: &StatusBarProps) -> Html {
    let fill = props.charge.min(100);
    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-size:14px; font-weight:500;">{"Status"}</span>
                <span style={format!("background:{}; color:#fff; font-size:12px; font-weight:700; padding:2px 10px; border-radius:999px;", props.status.color())}>{ props.status.label() }</span>
            </div>
            <div style="height:8px; background:#21262d; border-radius:4px; overflow:hidden;">
                <div style={format!("width:{}%; height:100%; background:#58a6ff; transition:width 50ms linear;", fill)}></div>
            </div>
        </div>
    }
}
