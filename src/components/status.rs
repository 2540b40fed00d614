use std::rc::Rc;
use yew::prelude::*;

use crate::components::cost_card::CostCard;
use crate::components::load_card::LoadCard;
use crate::models::status::{LoadState, Snapshot};

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub snapshot: Option<Rc<Snapshot>>,
    /// Name of the load whose toggle request is in flight, if any.
    pub pending_toggle: Option<String>,
    pub on_toggle: Callback<(String, LoadState)>,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let Some(snapshot) = &props.snapshot else {
        return html! {
            <div class="status-panel empty">
                <p>{"No status data available"}</p>
            </div>
        };
    };

    html! {
        <div class="status-panel">
            <div class="status-grid">
                { for snapshot.loads().iter().map(|load| {
                    let disabled = props.pending_toggle.as_deref() == Some(load.name.as_str());
                    html! {
                        <LoadCard
                            key={load.name.clone()}
                            load={load.clone()}
                            {disabled}
                            on_toggle={props.on_toggle.clone()}
                        />
                    }
                }) }
                <CostCard snapshot={snapshot.clone()} />
            </div>
        </div>
    }
}
