use super::*;

fn report(id: &str, status: DamageStatus) -> DamageReport {
    DamageReport {
        id: id.to_owned(),
        booking_id: format!("b-{id}"),
        description: "Dent on rear door".to_owned(),
        status,
        images: Vec::new(),
    }
}

#[test]
fn default_state_is_loading() {
    let state = DamageReportsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn apply_update_replaces_matching_report_and_clears_updating() {
    let mut state = DamageReportsState {
        items: vec![report("d1", DamageStatus::Pending), report("d2", DamageStatus::Pending)],
        loading: false,
        error: None,
        updating: Some("d2".to_owned()),
    };
    state.apply_update(report("d2", DamageStatus::Resolved));
    assert_eq!(state.items[1].status, DamageStatus::Resolved);
    assert_eq!(state.items[0].status, DamageStatus::Pending);
    assert!(state.updating.is_none());
    assert_eq!(state.unresolved_count(), 1);
}

#[test]
fn apply_update_for_unknown_id_keeps_items_but_finishes_update() {
    let mut state = DamageReportsState {
        items: vec![report("d1", DamageStatus::Pending)],
        loading: false,
        error: None,
        updating: Some("d1".to_owned()),
    };
    state.apply_update(report("zzz", DamageStatus::Resolved));
    assert_eq!(state.items, vec![report("d1", DamageStatus::Pending)]);
    assert!(state.updating.is_none());
}
