use yew::prelude::*;

use blitz_dashboard::components::{Clock, CostChart, StatusPanel};
use blitz_dashboard::hooks::use_dashboard::use_dashboard;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    let state = &dashboard.state;

    html! {
        <div class="app-container">
            <nav class="app-nav">
                <div class="app-brand">
                    <span class="app-brand-icon">{"⚡"}</span>
                    <h1>{"Blitz"}</h1>
                </div>
                <Clock />
            </nav>

            <main class="app-main">
                if state.is_loading() {
                    <div class="status loading">
                        <div class="spinner"></div>
                        <p>{"Loading data..."}</p>
                    </div>
                } else {
                    <section class="status-section">
                        <h2>{"Current Status"}</h2>
                        <StatusPanel
                            snapshot={state.snapshot().cloned()}
                            pending_toggle={state.pending_toggle().map(String::from)}
                            on_toggle={dashboard.toggle.clone()}
                        />
                    </section>

                    <section class="chart-section">
                        <h2>{"24-Hour Cost History"}</h2>
                        <CostChart history={state.history().clone()} />
                    </section>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
