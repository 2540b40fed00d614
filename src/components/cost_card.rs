use std::rc::Rc;
use yew::prelude::*;

use crate::models::status::Snapshot;

#[derive(Properties, PartialEq)]
pub struct CostCardProps {
    pub snapshot: Rc<Snapshot>,
}

/// Summary card showing the current hourly cost to two decimal places.
#[function_component(CostCard)]
pub fn cost_card(props: &CostCardProps) -> Html {
    html! {
        <div class="cost-card">
            <div class="cost-card-title">
                <span class="cost-icon">{"$"}</span>
                <span>{"Current Cost"}</span>
            </div>
            <div class="cost-card-value">
                <span class="cost-amount">{format!("${}", props.snapshot.cost_display())}</span>
                <span class="cost-unit">{"/hour"}</span>
            </div>
        </div>
    }
}
