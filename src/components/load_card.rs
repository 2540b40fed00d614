use yew::prelude::*;

use crate::models::status::{Load, LoadState};

#[derive(Properties, PartialEq)]
pub struct LoadCardProps {
    pub load: Load,
    /// True while this load's toggle request is in flight.
    pub disabled: bool,
    pub on_toggle: Callback<(String, LoadState)>,
}

#[function_component(LoadCard)]
pub fn load_card(props: &LoadCardProps) -> Html {
    let state = props.load.state;
    let icon_class = if state.is_on() {
        "power-icon on"
    } else {
        "power-icon off"
    };
    let badge_class = if state.is_on() {
        "state-badge on"
    } else {
        "state-badge off"
    };

    let onclick = {
        let name = props.load.name.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit((name.clone(), state.flipped())))
    };

    html! {
        <div class="load-card">
            <div class="load-card-header">
                <div class="load-card-title">
                    <span class={icon_class}>{"⏻"}</span>
                    <span class="load-name">{&props.load.name}</span>
                </div>
                <span class={badge_class}>{state.as_str()}</span>
            </div>
            <div class="load-card-body">
                <span class="load-power-label">{"Power Consumption:"}</span>
                <span class="load-power-value">{format!("{} W", props.load.power_display())}</span>
            </div>
            <button
                class="load-toggle"
                {onclick}
                disabled={props.disabled}
                aria-pressed={state.is_on().to_string()}
            >
                { if state.is_on() { "Turn OFF" } else { "Turn ON" } }
            </button>
        </div>
    }
}
