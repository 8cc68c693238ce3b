//! Unit tests for the in-memory backend.

use sf_core::{GeoPoint, StationId, UnitId};
use sf_model::{
    EntityUpdate, Station, StationPatch, StationStatus, Unit, UnitMode, UnitPatch,
};

use crate::{FleetStore, MemoryStore, StoreError};

fn unit(id: &str, code: &str) -> Unit {
    Unit {
        id: UnitId::new(id),
        code: code.to_owned(),
        position: Some(GeoPoint::new(28.47, 77.05)),
        soc: 60.0,
        soh: 95.0,
        temp: 28.0,
        mode: UnitMode::Active,
        destination: None,
        voltage: 52.0,
        speed: 0.0,
        cycles: 0,
    }
}

fn station(id: &str, code: &str) -> Station {
    Station {
        id: StationId::new(id),
        code: code.to_owned(),
        name: code.to_owned(),
        region: "Test".into(),
        position: GeoPoint::new(28.47, 77.05),
        swap_rate: 40.0,
        charger_health: 99.0,
        load_pct: 0.0,
        surge_price: 1.0,
        status: StationStatus::Ok,
        thermal: 28.0,
        queue_count: 0,
    }
}

fn unit_patch(id: &str, soc: f64) -> UnitPatch {
    UnitPatch {
        id: UnitId::new(id),
        soc,
        position: Some(GeoPoint::new(28.48, 77.06)),
        mode: UnitMode::Active,
        destination: None,
        voltage: 51.0,
        speed: 3.0,
        cycles: 1,
    }
}

#[test]
fn snapshot_reflects_seeded_state() {
    let store = MemoryStore::seeded(
        vec![unit("u-1", "BAT-001"), unit("u-2", "BAT-002")],
        vec![station("s-1", "ST-01")],
    )
    .unwrap();

    let snap = store.snapshot().unwrap();
    assert_eq!(snap.units.len(), 2);
    assert_eq!(snap.stations.len(), 1);
    assert_eq!(snap.units[0].code, "BAT-001");
}

#[test]
fn commit_applies_unit_and_station_patches() {
    let mut store = MemoryStore::seeded(
        vec![unit("u-1", "BAT-001")],
        vec![station("s-1", "ST-01")],
    )
    .unwrap();

    store
        .commit(vec![
            EntityUpdate::Unit(unit_patch("u-1", 42.0)),
            EntityUpdate::Station(StationPatch {
                id: StationId::new("s-1"),
                load_pct: 60.0,
                surge_price: 1.8,
                status: StationStatus::Degraded,
                thermal: 44.0,
                queue_count: 3,
            }),
        ])
        .unwrap();

    let snap = store.snapshot().unwrap();
    assert_eq!(snap.units[0].soc, 42.0);
    assert_eq!(snap.units[0].cycles, 1);
    assert_eq!(snap.stations[0].status, StationStatus::Degraded);
    assert_eq!(snap.stations[0].queue_count, 3);
}

#[test]
fn commit_never_touches_identity_or_telemetry() {
    let mut store =
        MemoryStore::seeded(vec![unit("u-1", "BAT-001")], vec![]).unwrap();
    store
        .commit(vec![EntityUpdate::Unit(unit_patch("u-1", 42.0))])
        .unwrap();

    let snap = store.snapshot().unwrap();
    assert_eq!(snap.units[0].code, "BAT-001");
    assert_eq!(snap.units[0].soh, 95.0);
    assert_eq!(snap.units[0].temp, 28.0);
}

#[test]
fn commit_with_unknown_id_is_rejected_atomically() {
    let mut store =
        MemoryStore::seeded(vec![unit("u-1", "BAT-001")], vec![]).unwrap();

    let err = store
        .commit(vec![
            EntityUpdate::Unit(unit_patch("u-1", 42.0)),
            EntityUpdate::Unit(unit_patch("ghost", 10.0)),
        ])
        .unwrap_err();
    assert!(matches!(err, StoreError::UnitNotFound(_)));

    // The valid patch in the same batch must not have been applied.
    let snap = store.snapshot().unwrap();
    assert_eq!(snap.units[0].soc, 60.0);
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut store =
        MemoryStore::seeded(vec![unit("u-1", "BAT-001")], vec![]).unwrap();
    let err = store
        .insert_units(vec![unit("u-1", "BAT-099")])
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateIdentity { kind: "unit", .. }));
    assert_eq!(store.unit_count(), 1);
}

#[test]
fn insert_rejects_duplicate_code() {
    let mut store =
        MemoryStore::seeded(vec![unit("u-1", "BAT-001")], vec![]).unwrap();
    let err = store
        .insert_units(vec![unit("u-2", "BAT-001")])
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateIdentity { .. }));
    assert_eq!(store.unit_count(), 1);
}

#[test]
fn insert_rejects_intra_batch_duplicates() {
    let mut store = MemoryStore::new();
    let err = store
        .insert_units(vec![unit("u-1", "BAT-001"), unit("u-1", "BAT-002")])
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateIdentity { .. }));
    assert_eq!(store.unit_count(), 0);
}

#[test]
fn inserted_units_are_committable() {
    let mut store = MemoryStore::new();
    store.insert_units(vec![unit("u-9", "BAT-009")]).unwrap();
    store
        .commit(vec![EntityUpdate::Unit(unit_patch("u-9", 33.0))])
        .unwrap();
    assert_eq!(store.snapshot().unwrap().units[0].soc, 33.0);
}

#[test]
fn duplicate_station_is_rejected() {
    let mut store = MemoryStore::new();
    store.insert_station(station("s-1", "ST-01")).unwrap();
    let err = store.insert_station(station("s-1", "ST-02")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateIdentity { kind: "station", .. }));
    assert_eq!(store.station_count(), 1);
}
