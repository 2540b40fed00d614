#[cfg(test)]
mod tests {
    use blitz_dashboard::hooks::use_dashboard::{DashboardAction, DashboardState};
    use blitz_dashboard::models::{
        error::AppError,
        history::{History, HistoryEntry},
        status::{Load, LoadState, Snapshot, StatusResponse},
    };
    use blitz_dashboard::utils::guard::LifecycleGuard;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::functional::Reducible;

    // Helper to run the reducer outside a component
    fn apply(state: Rc<DashboardState>, action: DashboardAction) -> Rc<DashboardState> {
        state.reduce(action)
    }

    // Helper to build a two-load snapshot
    fn create_test_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Load {
                    name: "Load1".to_string(),
                    state: LoadState::On,
                    power_watts: 100.4,
                },
                Load {
                    name: "Load2".to_string(),
                    state: LoadState::Off,
                    power_watts: 0.0,
                },
            ],
            0.25,
        )
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== LoadState Tests =====

    #[test]
    fn test_load_state_wire_literals() {
        assert_eq!(serde_json::to_string(&LoadState::On).unwrap(), "\"ON\"");
        assert_eq!(serde_json::to_string(&LoadState::Off).unwrap(), "\"OFF\"");

        let on: LoadState = serde_json::from_str("\"ON\"").unwrap();
        assert_eq!(on, LoadState::On);
    }

    #[test]
    fn test_load_state_rejects_unknown_values() {
        let result: Result<LoadState, _> = serde_json::from_str("\"MAYBE\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_state_flipped() {
        assert_eq!(LoadState::On.flipped(), LoadState::Off);
        assert_eq!(LoadState::Off.flipped(), LoadState::On);
    }

    // ===== Status Snapshot Tests =====

    #[test]
    fn test_status_response_conversion() {
        let json = r#"{
            "status": {"A": "ON", "B": "OFF"},
            "power": {"A_Power": 100.4, "B_Power": 0},
            "cost": 0.42
        }"#;

        let raw: StatusResponse = serde_json::from_str(json).unwrap();
        let snapshot = Snapshot::try_from(raw).unwrap();

        // Loads are ordered by name regardless of wire map iteration order
        let loads = snapshot.loads();
        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].name, "A");
        assert_eq!(loads[0].state, LoadState::On);
        assert_eq!(loads[1].name, "B");
        assert_eq!(loads[1].state, LoadState::Off);
        assert_eq!(snapshot.cost_per_hour(), 0.42);
    }

    #[test]
    fn test_wattage_rounds_to_whole_watts() {
        let json = r#"{
            "status": {"A": "ON", "B": "OFF"},
            "power": {"A_Power": 100.4, "B_Power": 0},
            "cost": 0.42
        }"#;

        let raw: StatusResponse = serde_json::from_str(json).unwrap();
        let snapshot = Snapshot::try_from(raw).unwrap();

        assert_eq!(snapshot.loads()[0].power_display(), 100);
        assert_eq!(snapshot.loads()[1].power_display(), 0);
    }

    #[test]
    fn test_missing_power_key_is_rejected() {
        let json = r#"{
            "status": {"A": "ON", "B": "OFF"},
            "power": {"A_Power": 100.4},
            "cost": 0.42
        }"#;

        let raw: StatusResponse = serde_json::from_str(json).unwrap();
        let result = Snapshot::try_from(raw);

        match result {
            Err(AppError::DataError(msg)) => assert!(msg.contains('B')),
            other => panic!("Expected DataError, got {other:?}"),
        }
    }

    #[test]
    fn test_cost_display_two_decimals() {
        // 1.005 sits just below the decimal half-way point in binary, so
        // {:.2} rounds down. Pinned so a formatting change is caught.
        let snapshot = Snapshot::new(vec![], 1.005);
        assert_eq!(snapshot.cost_display(), "1.00");

        let snapshot = Snapshot::new(vec![], 12.0);
        assert_eq!(snapshot.cost_display(), "12.00");
    }

    #[test]
    fn test_set_state_targets_single_load() {
        let mut snapshot = create_test_snapshot();
        snapshot.set_state("Load1", LoadState::Off);

        assert_eq!(snapshot.loads()[0].state, LoadState::Off);
        assert_eq!(snapshot.loads()[1].state, LoadState::Off);

        // Unknown names are a no-op
        snapshot.set_state("Load9", LoadState::On);
        assert!(snapshot.loads().iter().all(|l| l.state == LoadState::Off));
    }

    // ===== History Tests =====

    #[test]
    fn test_history_entry_rfc3339_timestamp() {
        let json = r#"{"timestamp": "2026-08-29T12:30:00Z", "cost": 0.31}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 29, 12, 30, 0).unwrap()
        );
        assert_eq!(entry.cost, 0.31);
    }

    #[test]
    fn test_history_entry_offsetless_timestamp() {
        // datetime.isoformat() output carries no offset
        let json = r#"{"timestamp": "2026-08-29T12:30:00.123456", "cost": 0.31}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.timestamp.format("%H:%M").to_string(), "12:30");
    }

    #[test]
    fn test_history_entry_ignores_extra_fields() {
        let json = r#"{
            "timestamp": "2026-08-29T12:30:00Z",
            "cost": 0.31,
            "Load1_Power": 512.7,
            "Load1_Status": "ON"
        }"#;

        let entry: Result<HistoryEntry, _> = serde_json::from_str(json);
        assert!(entry.is_ok());
    }

    #[test]
    fn test_history_series_preserves_received_order() {
        let entries = vec![
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 29, 13, 0, 0).unwrap(),
                cost: 0.4,
            },
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap(),
                cost: 0.2,
            },
        ];

        let (x_data, y_data) = History::new(entries).series_data();

        // Out-of-order input stays out of order: the series is plotted
        // exactly as received
        assert_eq!(x_data, vec!["2026-08-29 13:00", "2026-08-29 12:00"]);
        assert_eq!(y_data, vec![0.4, 0.2]);
    }

    #[test]
    fn test_series_labels_carry_full_date() {
        let entries = vec![
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap(),
                cost: 0.2,
            },
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap(),
                cost: 0.4,
            },
        ];

        let (x_data, _) = History::new(entries).series_data();

        // Samples a day apart must stay distinguishable on hover; the axis
        // trims the label to hour:minute, the tooltip shows it whole
        assert_eq!(x_data[0], "2026-08-28 12:00");
        assert_eq!(x_data[1], "2026-08-29 12:00");
        assert_ne!(x_data[0], x_data[1]);
    }

    #[test]
    fn test_empty_history_yields_empty_series() {
        let history = History::default();
        let (x_data, y_data) = history.series_data();

        assert!(history.is_empty());
        assert!(x_data.is_empty());
        assert!(y_data.is_empty());
    }

    // ===== Lifecycle Guard Tests =====

    #[test]
    fn test_guard_runs_while_alive() {
        let guard = LifecycleGuard::new();
        let count = Cell::new(0);

        guard.run_if_alive(|| count.set(count.get() + 1));

        assert!(guard.is_alive());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_revoked_guard_suppresses_dispatch() {
        // Unmounting while a poll timer is pending: the task's clone
        // observes the cleanup's revoke and the scheduled work never runs
        let guard = LifecycleGuard::new();
        let task_guard = guard.clone();

        let fetches = Rc::new(Cell::new(0));
        let run_cycle = {
            let fetches = fetches.clone();
            move || task_guard.run_if_alive(|| fetches.set(fetches.get() + 1))
        };

        run_cycle();
        assert_eq!(fetches.get(), 1);

        guard.revoke();
        run_cycle();
        assert_eq!(fetches.get(), 1);
        assert!(!guard.is_alive());
    }

    // ===== Dashboard Reducer Tests =====

    #[test]
    fn test_loading_until_both_fetches_settle() {
        let state = Rc::new(DashboardState::default());
        assert!(state.is_loading());

        let state = apply(
            state,
            DashboardAction::StatusFetched(Some(create_test_snapshot())),
        );
        assert!(state.is_loading());

        let state = apply(state, DashboardAction::HistoryFetched(Some(History::default())));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_fetches_still_settle() {
        // Both fetches fail: the view leaves loading with data absent,
        // there is no separate error phase
        let state = Rc::new(DashboardState::default());
        let state = apply(state, DashboardAction::StatusFetched(None));
        let state = apply(state, DashboardAction::HistoryFetched(None));

        assert!(!state.is_loading());
        assert!(state.snapshot().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_failed_poll_keeps_previous_snapshot() {
        let state = Rc::new(DashboardState::default());
        let state = apply(
            state,
            DashboardAction::StatusFetched(Some(create_test_snapshot())),
        );

        let state = apply(state, DashboardAction::StatusFetched(None));
        assert!(state.snapshot().is_some());
        assert_eq!(state.snapshot().unwrap().loads().len(), 2);
    }

    #[test]
    fn test_optimistic_toggle_flips_only_target_load() {
        let state = Rc::new(DashboardState::default());
        let state = apply(
            state,
            DashboardAction::StatusFetched(Some(create_test_snapshot())),
        );

        // The flip happens before any network resolution
        let state = apply(
            state,
            DashboardAction::ToggleStarted {
                load: "Load1".to_string(),
                desired: LoadState::Off,
            },
        );

        let loads = state.snapshot().unwrap().loads();
        assert_eq!(loads[0].state, LoadState::Off);
        assert_eq!(loads[1].state, LoadState::Off);
        assert_eq!(state.pending_toggle(), Some("Load1"));
    }

    #[test]
    fn test_toggle_settled_keeps_optimistic_state() {
        // A failed request settles the toggle without rolling back the
        // displayed state; the next poll reconciles with the device
        let state = Rc::new(DashboardState::default());
        let state = apply(
            state,
            DashboardAction::StatusFetched(Some(create_test_snapshot())),
        );
        let state = apply(
            state,
            DashboardAction::ToggleStarted {
                load: "Load2".to_string(),
                desired: LoadState::On,
            },
        );
        let state = apply(state, DashboardAction::ToggleSettled);

        assert_eq!(state.pending_toggle(), None);
        assert_eq!(state.snapshot().unwrap().loads()[1].state, LoadState::On);
    }

    #[test]
    fn test_toggle_without_snapshot_is_safe() {
        let state = Rc::new(DashboardState::default());
        let state = apply(
            state,
            DashboardAction::ToggleStarted {
                load: "Load1".to_string(),
                desired: LoadState::On,
            },
        );

        assert!(state.snapshot().is_none());
        assert_eq!(state.pending_toggle(), Some("Load1"));
    }

    #[test]
    fn test_poll_overwrites_snapshot_wholesale() {
        let state = Rc::new(DashboardState::default());
        let state = apply(
            state,
            DashboardAction::StatusFetched(Some(create_test_snapshot())),
        );

        let replacement = Snapshot::new(
            vec![Load {
                name: "Load3".to_string(),
                state: LoadState::On,
                power_watts: 250.0,
            }],
            0.5,
        );
        let state = apply(state, DashboardAction::StatusFetched(Some(replacement)));

        let loads = state.snapshot().unwrap().loads();
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].name, "Load3");
    }
}
