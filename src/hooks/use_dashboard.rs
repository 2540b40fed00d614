use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::history::History;
use crate::models::status::{LoadState, Snapshot};
use crate::services::api::{fetch_history, fetch_status, toggle_load};
use crate::utils::guard::LifecycleGuard;

/// Everything the view holds: the last-fetched snapshot and history, whether
/// the two initial fetches have settled, and the load whose toggle request is
/// currently in flight.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardState {
    snapshot: Option<Rc<Snapshot>>,
    history: Rc<History>,
    status_settled: bool,
    history_settled: bool,
    pending_toggle: Option<String>,
}

impl DashboardState {
    /// True until both initial fetches have settled, success or failure.
    pub fn is_loading(&self) -> bool {
        !(self.status_settled && self.history_settled)
    }

    pub fn snapshot(&self) -> Option<&Rc<Snapshot>> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> &Rc<History> {
        &self.history
    }

    pub fn pending_toggle(&self) -> Option<&str> {
        self.pending_toggle.as_deref()
    }
}

#[derive(Debug)]
pub enum DashboardAction {
    /// A status fetch settled. `None` means it failed; previous data is kept.
    StatusFetched(Option<Snapshot>),
    /// A history fetch settled, same convention.
    HistoryFetched(Option<History>),
    /// A toggle control was activated: flip the displayed state immediately
    /// and disable that load's control while the request is in flight.
    ToggleStarted { load: String, desired: LoadState },
    /// The toggle request resolved. The optimistic flip stays in place even
    /// on failure; the next poll reconciles with the device.
    ToggleSettled,
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            DashboardAction::StatusFetched(snapshot) => {
                if let Some(snapshot) = snapshot {
                    next.snapshot = Some(Rc::new(snapshot));
                }
                next.status_settled = true;
            }
            DashboardAction::HistoryFetched(history) => {
                if let Some(history) = history {
                    next.history = Rc::new(history);
                }
                next.history_settled = true;
            }
            DashboardAction::ToggleStarted { load, desired } => {
                if let Some(snapshot) = &next.snapshot {
                    let mut updated = (**snapshot).clone();
                    updated.set_state(&load, desired);
                    next.snapshot = Some(Rc::new(updated));
                }
                next.pending_toggle = Some(load);
            }
            DashboardAction::ToggleSettled => {
                next.pending_toggle = None;
            }
        }

        Rc::new(next)
    }
}

/// Handle returned by `use_dashboard`.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub toggle: Callback<(String, LoadState)>,
}

#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer_eq(DashboardState::default);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let dispatcher = state.dispatcher();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            // Everything this cycle spawns runs through the guard, so
            // nothing dispatches after unmount or a newer cycle.
            let guard = LifecycleGuard::new();

            {
                let dispatcher = dispatcher.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    let fetched = fetch_status().await;
                    guard.run_if_alive(move || match fetched {
                        Ok(snapshot) => {
                            dispatcher.dispatch(DashboardAction::StatusFetched(Some(snapshot)));
                        }
                        Err(e) => {
                            gloo::console::error!(format!("Status fetch failed: {e}"));
                            dispatcher.dispatch(DashboardAction::StatusFetched(None));
                        }
                    });
                });
            }

            {
                let dispatcher = dispatcher.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    let fetched = fetch_history().await;
                    guard.run_if_alive(move || match fetched {
                        Ok(history) => {
                            dispatcher.dispatch(DashboardAction::HistoryFetched(Some(history)));
                        }
                        Err(e) => {
                            gloo::console::error!(format!("History fetch failed: {e}"));
                            dispatcher.dispatch(DashboardAction::HistoryFetched(None));
                        }
                    });
                });
            }

            // Schedule the next poll cycle
            if Config::ENABLE_AUTO_REFRESH {
                let guard = guard.clone();
                let trigger = trigger.clone();
                spawn_local(async move {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    guard.run_if_alive(move || trigger.set(trigger_value.wrapping_add(1)));
                });
            }

            move || guard.revoke() // Cleanup
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |(load, desired): (String, LoadState)| {
            let dispatcher = state.dispatcher();

            // Optimistic: flip the displayed state before the request
            // resolves. A later poll is the reconciliation path.
            dispatcher.dispatch(DashboardAction::ToggleStarted {
                load: load.clone(),
                desired,
            });

            spawn_local(async move {
                if let Err(e) = toggle_load(&load, desired).await {
                    gloo::console::error!(format!("Toggle failed for {load}: {e}"));
                    gloo::dialogs::alert(&format!("Failed to switch {load} {desired}: {e}"));
                }
                dispatcher.dispatch(DashboardAction::ToggleSettled);
            });
        })
    };

    DashboardHandle { state, toggle }
}
