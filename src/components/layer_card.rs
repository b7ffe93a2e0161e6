use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LayerCardProps {
    pub title: &'static str,
    pub color: &'static str,
    pub body: AttrValue,
}

#[function_component(LayerCard)]
pub fn layer_card(props: &LayerCardProps) -> Html {
    html! { <div style="background:#0d1117; border:1px solid #30363d; border-radius:8px; padding:16px;"> <h4 style={format!("margin:0 0 6px 0; font-weight:600; color:{};", props.color)}>{ props.title }</h4> <p style="margin:0; font-size:13px; color:#8b949e;">{ props.body.clone() }</p> </div> }
}
