//! Occupancy contracts (OCC-001 through OCC-005)
//!
//! The free-space counter stays within `0..=capacity` and each plate is
//! parked at most once.

use crate::common::*;
use smartpark::{EntryOutcome, ExitOutcome};

/// CONTRACT OCC-001: A fresh registry is empty with every space free
#[test]
fn contract_fresh_registry_is_empty() {
    let lot = lot(1000);
    assert!(lot.registry.is_empty());
    assert_eq!(lot.registry.free_spaces(), 1000);
    assert!(lot.registry.cars_currently_parked().is_empty());
    assert!(lot.log.is_empty());
}

/// CONTRACT OCC-002: Releasing from an empty lot never raises the count above capacity
#[test]
fn contract_free_spaces_never_exceed_capacity() {
    let lot = lot(3);
    for _ in 0..10 {
        assert_eq!(lot.registry.release(None), 3);
    }
    assert!(matches!(
        lot.registry.depart(None),
        ExitOutcome::Ignored { free_spaces: 3 }
    ));
    assert!(lot.log.is_empty(), "ignored releases must not be logged");
}

/// CONTRACT OCC-003: A full lot refuses every arrival and the count stays at zero
#[test]
fn contract_full_lot_refuses_without_change() {
    let lot = lot(2);
    lot.registry.admit(Some("A1"), "", "");
    lot.registry.admit(None, "", "");

    for plate in [Some("B1"), None, Some("A1")] {
        let outcome = lot.registry.arrive(plate, "", "");
        assert!(
            matches!(outcome, EntryOutcome::RefusedFull { free_spaces: 0, .. }),
            "expected full refusal for {plate:?}, got {outcome:?}"
        );
    }
    assert_eq!(lot.registry.free_spaces(), 0);
    assert_eq!(lot.registry.cars_currently_parked().len(), 1);
}

/// CONTRACT OCC-004: A plate already parked is refused and the first record survives
#[test]
fn contract_duplicate_plate_refused() {
    let lot = lot(10);
    lot.registry.admit(Some("1ABC234"), "Mazda", "3");
    lot.clock.advance(chrono::Duration::minutes(10));

    let outcome = lot.registry.arrive(Some(" 1ABC234 "), "Holden", "Barina");
    assert!(matches!(outcome, EntryOutcome::RefusedDuplicate { free_spaces: 9, .. }));

    let parked = lot.registry.cars_currently_parked();
    assert_eq!(parked.len(), 1);
    assert_eq!(parked[0].make, "Mazda");
    assert_eq!(parked[0].entry_time, opening_time());
}

/// CONTRACT OCC-005: Departing with an unknown plate changes nothing
#[test]
fn contract_unknown_exit_refused() {
    let lot = lot(10);
    lot.registry.admit(Some("KNOWN"), "", "");

    let outcome = lot.registry.depart(Some("STRANGER"));
    assert!(matches!(outcome, ExitOutcome::RefusedUnknown { free_spaces: 9, .. }));
    assert_eq!(lot.registry.free_spaces(), 9);
    assert_eq!(lot.registry.cars_currently_parked().len(), 1);
}

/// CONTRACT OCC-006: A plate may re-enter after it has left
#[test]
fn contract_plate_can_return_after_leaving() {
    let lot = lot(5);
    lot.registry.admit(Some("RETURNER"), "", "");
    lot.registry.release(Some("RETURNER"));

    assert!(lot.registry.arrive(Some("RETURNER"), "", "").is_admitted());
    assert_eq!(lot.registry.free_spaces(), 4);
}
