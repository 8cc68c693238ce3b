//! Integration-style tests for the tick loop, run against [`MemoryStore`].

use sf_core::{GeoPoint, SimParams, SimRng, StationId, Tick, UnitId};
use sf_model::{Destination, EntityUpdate, Station, StationStatus, Unit, UnitMode};
use sf_store::{FleetSnapshot, FleetStore, MemoryStore, StoreError, StoreResult};

use crate::maintenance::ensure_fleet;
use crate::{NoopObserver, Sim, TickEvent, TickObserver};

fn unit(id: &str, code: &str, lat: f64, lng: f64) -> Unit {
    Unit {
        id: UnitId::new(id),
        code: code.to_owned(),
        position: Some(GeoPoint::new(lat, lng)),
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

fn sentinel() -> Unit {
    unit("sentinel-seed", "USER-001", 28.45, 77.05)
}

fn station(id: &str, lat: f64, lng: f64) -> Station {
    Station {
        id: StationId::new(id),
        code: id.to_uppercase(),
        name: format!("Station {id}"),
        region: "Test".into(),
        position: GeoPoint::new(lat, lng),
        swap_rate: 40.0,
        charger_health: 99.0,
        load_pct: 0.0,
        surge_price: 1.0,
        status: StationStatus::Ok,
        thermal: 28.0,
        queue_count: 0,
    }
}

/// A store whose commits always fail, for atomicity tests.
struct FailingStore(MemoryStore);

impl FleetStore for FailingStore {
    fn snapshot(&self) -> StoreResult<FleetSnapshot> {
        self.0.snapshot()
    }
    fn commit(&mut self, _updates: Vec<EntityUpdate>) -> StoreResult<()> {
        Err(StoreError::Backend("injected failure".into()))
    }
    fn insert_units(&mut self, units: Vec<Unit>) -> StoreResult<()> {
        self.0.insert_units(units)
    }
}

#[cfg(test)]
mod fleet_maintenance {
    use super::*;

    #[test]
    fn tops_up_an_empty_fleet_and_spawns_the_sentinel() {
        let params = SimParams::default();
        let mut rng = SimRng::new(params.seed);
        let (spawned, events) = ensure_fleet(&[], &params, Tick::ZERO, &mut rng);

        assert_eq!(spawned.len(), params.fleet_target);
        assert_eq!(
            spawned.iter().filter(|u| u.code == params.sentinel_code).count(),
            1
        );
        assert!(events.iter().any(|e| matches!(e, TickEvent::SentinelSpawned { .. })));
        assert!(events.iter().any(
            |e| matches!(e, TickEvent::FleetBoosted { added } if *added == params.fleet_target - 1)
        ));

        // Every spawn is placed inside the service area with sane telemetry.
        for u in &spawned {
            let p = u.position.expect("spawns are placed");
            assert!(params.area.contains(p));
            assert!((0.0..=100.0).contains(&u.soc));
            assert_eq!(u.mode, UnitMode::Active);
        }
    }

    #[test]
    fn sentinel_spawns_with_a_low_charge() {
        let params = SimParams::default();
        let mut rng = SimRng::new(7);
        let (spawned, _) = ensure_fleet(&[], &params, Tick::ZERO, &mut rng);
        let s = spawned
            .iter()
            .find(|u| u.code == params.sentinel_code)
            .expect("sentinel spawned");
        assert!(s.soc < params.low_charge, "sentinel must start below the seek threshold");
    }

    #[test]
    fn a_full_fleet_needs_nothing() {
        let mut params = SimParams::default();
        params.fleet_target = 2;
        let existing = vec![sentinel(), unit("u-1", "BAT-001", 28.46, 77.04)];
        let mut rng = SimRng::new(params.seed);
        let (spawned, events) = ensure_fleet(&existing, &params, Tick(3), &mut rng);
        assert!(spawned.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn generated_codes_continue_past_the_highest_existing() {
        let mut params = SimParams::default();
        params.fleet_target = 4;
        let existing = vec![sentinel(), unit("u-1", "BAT-207", 28.46, 77.04)];
        let mut rng = SimRng::new(params.seed);
        let (spawned, _) = ensure_fleet(&existing, &params, Tick(1), &mut rng);

        let codes: Vec<&str> = spawned.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, ["BAT-208", "BAT-209"]);
    }

    #[test]
    fn faulty_units_still_count_toward_the_target() {
        let mut params = SimParams::default();
        params.fleet_target = 2;
        let mut broken = unit("u-1", "BAT-001", 28.46, 77.04);
        broken.mode = UnitMode::Faulty;
        let existing = vec![sentinel(), broken];
        let mut rng = SimRng::new(params.seed);
        let (spawned, _) = ensure_fleet(&existing, &params, Tick(1), &mut rng);
        assert!(spawned.is_empty());
    }
}

#[cfg(test)]
mod tick_loop {
    use super::*;

    #[test]
    fn one_tick_advances_the_fleet_and_the_counter() {
        let store = MemoryStore::seeded(vec![], vec![station("s-1", 28.47, 77.05)]).unwrap();
        let mut sim = Sim::new(store, SimParams::default()).unwrap();

        let report = sim.run_tick(&mut NoopObserver).unwrap();
        assert_eq!(report.tick, Tick::ZERO);
        assert_eq!(sim.tick(), Tick(1));
        assert_eq!(report.units_advanced, sim.params.fleet_target);
        assert_eq!(report.stations_recomputed, 1);

        // Every spawned unit has been committed with recomputed telemetry.
        let snap = sim.store.snapshot().unwrap();
        assert_eq!(snap.units.len(), sim.params.fleet_target);
        assert!(snap.units.iter().all(|u| u.speed >= 0.0));
    }

    #[test]
    fn an_empty_station_set_is_reported() {
        let mut sim = Sim::new(MemoryStore::new(), SimParams::default()).unwrap();
        let report = sim.run_tick(&mut NoopObserver).unwrap();
        assert!(report.events.contains(&TickEvent::NoStations));
        assert_eq!(report.stations_recomputed, 0);
    }

    #[test]
    fn arrival_is_reported_and_the_destination_cleared() {
        let mut params = SimParams::default();
        params.fleet_target = 1;
        params.movement_step = 0.0;

        let mut traveler = sentinel();
        traveler.soc = 60.0;
        traveler.destination = Some(Destination {
            position: GeoPoint::new(28.4502, 77.0500),
            name: Some("Sector 14 Grid".into()),
        });
        let store = MemoryStore::seeded(
            vec![traveler],
            vec![station("s-1", 28.40, 77.00)],
        )
        .unwrap();
        let mut sim = Sim::new(store, params).unwrap();

        let report = sim.run_tick(&mut NoopObserver).unwrap();
        assert!(report.events.iter().any(|e| matches!(
            e,
            TickEvent::Arrived { code, destination }
                if code == "USER-001" && destination.as_deref() == Some("Sector 14 Grid")
        )));
        assert_eq!(sim.store.snapshot().unwrap().units[0].destination, None);
    }

    #[test]
    fn a_failed_commit_leaves_state_and_counter_unchanged() {
        let mut params = SimParams::default();
        params.fleet_target = 1; // fully staffed, so no maintenance inserts
        let inner = MemoryStore::seeded(
            vec![sentinel()],
            vec![station("s-1", 28.47, 77.05)],
        )
        .unwrap();
        let before = inner.snapshot().unwrap();
        let mut sim = Sim::new(FailingStore(inner), params).unwrap();

        assert!(sim.run_tick(&mut NoopObserver).is_err());
        assert_eq!(sim.tick(), Tick::ZERO);

        let after = sim.store.snapshot().unwrap();
        assert_eq!(after.units, before.units);
        assert_eq!(after.stations, before.stations);
    }

    #[test]
    fn identical_seeds_produce_identical_runs() {
        let run = || {
            let store = MemoryStore::seeded(
                vec![],
                vec![station("s-1", 28.45, 77.02), station("s-2", 28.50, 77.10)],
            )
            .unwrap();
            let mut sim = Sim::new(store, SimParams::default()).unwrap();
            sim.run_ticks(5, &mut NoopObserver).unwrap();
            sim.store.snapshot().unwrap()
        };

        let a = run();
        let b = run();
        assert_eq!(a.units, b.units);
        assert_eq!(a.stations, b.stations);
    }

    #[test]
    fn charge_stays_in_bounds_over_a_long_run() {
        let store = MemoryStore::seeded(vec![], vec![station("s-1", 28.45, 77.05)]).unwrap();
        let mut sim = Sim::new(store, SimParams::default()).unwrap();
        sim.run_ticks(100, &mut NoopObserver).unwrap();

        let snap = sim.store.snapshot().unwrap();
        for u in &snap.units {
            assert!((0.0..=100.0).contains(&u.soc), "{} out of bounds: {}", u.code, u.soc);
        }
        // The fleet cycles: something must have entered charging in 100 ticks.
        assert!(snap.units.iter().any(|u| u.cycles > 0 || u.mode == UnitMode::Charging));
    }

    #[test]
    fn invalid_params_are_rejected_up_front() {
        let mut params = SimParams::default();
        params.saturation_count = 0;
        assert!(Sim::new(MemoryStore::new(), params).is_err());
    }

    #[test]
    fn observer_sees_every_boundary() {
        #[derive(Default)]
        struct Recorder {
            starts: Vec<Tick>,
            ends: Vec<Tick>,
            snapshots: Vec<(Tick, usize)>,
            finished: Option<Tick>,
        }
        impl TickObserver for Recorder {
            fn on_tick_start(&mut self, tick: Tick) {
                self.starts.push(tick);
            }
            fn on_tick_end(&mut self, tick: Tick, _report: &crate::TickReport) {
                self.ends.push(tick);
            }
            fn on_snapshot(&mut self, tick: Tick, units: &[Unit], _stations: &[Station]) {
                self.snapshots.push((tick, units.len()));
            }
            fn on_sim_end(&mut self, final_tick: Tick) {
                self.finished = Some(final_tick);
            }
        }

        let store = MemoryStore::seeded(vec![], vec![station("s-1", 28.47, 77.05)]).unwrap();
        let mut sim = Sim::new(store, SimParams::default()).unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(3, &mut rec).unwrap();

        assert_eq!(rec.starts, [Tick(0), Tick(1), Tick(2)]);
        assert_eq!(rec.ends, rec.starts);
        // Default interval is every tick, with post-commit fleet sizes.
        assert_eq!(rec.snapshots.len(), 3);
        assert!(rec.snapshots.iter().all(|(_, n)| *n == 25));
        assert_eq!(rec.finished, Some(Tick(3)));
    }
}
