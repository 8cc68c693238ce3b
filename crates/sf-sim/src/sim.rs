//! The `Sim` struct and its tick loop.

use sf_core::{EntityRng, SimParams, SimRng, Tick};
use sf_engine::{UnitStep, advance_unit, recompute_station};
use sf_model::{EntityUpdate, Station, StationPatch, Unit};
use sf_policy::WorldView;
use sf_spatial::UnitIndex;
use sf_store::FleetStore;

use crate::maintenance::ensure_fleet;
use crate::{SimResult, TickEvent, TickObserver, TickReport};

/// The main simulation runner.
///
/// `Sim<S>` drives the four-phase tick loop against any [`FleetStore`]:
///
/// 1. **Maintenance** (sequential): top the fleet up to `fleet_target` and
///    respawn the sentinel unit if it has gone missing.  Spawns are inserted
///    into the store and joined onto the working snapshot immediately.
/// 2. **Snapshot**: one owned read of the whole fleet, plus the spatial
///    index built over it.  The compute phase sees nothing else.
/// 3. **Compute** (optionally parallel with the `parallel` feature): run the
///    unit state machine and station load model for every entity, each with
///    a fresh [`EntityRng`] derived from `(seed, id, tick)`.  Entities never
///    share RNG state, so parallel and sequential runs are bit-identical.
/// 4. **Commit** (sequential): apply every produced patch as one atomic
///    batch.  The tick counter advances only if the commit succeeds, so a
///    failed tick can be retried against identical state and RNG streams.
pub struct Sim<S: FleetStore> {
    pub params: SimParams,
    pub store: S,
    tick: Tick,
    /// Simulation-level RNG, used only by the sequential maintenance phase.
    rng: SimRng,
}

impl<S: FleetStore> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Validate `params` and wrap a store into a runnable simulation.
    pub fn new(store: S, params: SimParams) -> SimResult<Self> {
        params.validate()?;
        let rng = SimRng::new(params.seed);
        Ok(Sim {
            params,
            store,
            tick: Tick::ZERO,
            rng,
        })
    }

    /// The next tick to be processed (equals the number of committed ticks).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Process one tick.  On success the commit has been applied and the
    /// counter advanced; on error the store and counter are unchanged.
    pub fn run_tick<O: TickObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: fleet maintenance ────────────────────────────────────
        let snapshot = self.store.snapshot()?;
        let (spawned, mut events) =
            ensure_fleet(&snapshot.units, &self.params, now, &mut self.rng);

        let mut units = snapshot.units;
        let stations = snapshot.stations;
        if !spawned.is_empty() {
            self.store.insert_units(spawned.clone())?;
            units.extend(spawned);
        }
        if stations.is_empty() {
            events.push(TickEvent::NoStations);
        }

        // ── Phase 2: spatial index over the working snapshot ──────────────
        let index = UnitIndex::build(&units);
        let view = WorldView::new(&units, &stations, &index);

        // ── Phase 3: compute (side-effect-free) ───────────────────────────
        let steps = compute_unit_steps(&units, &view, &self.params, now);
        let station_patches = compute_station_patches(&stations, &view, &self.params, now);

        // ── Phase 4: collect events and commit atomically ─────────────────
        let mut units_advanced = 0;
        let mut updates = Vec::with_capacity(units.len() + stations.len());
        for (unit, step) in units.iter().zip(steps) {
            let Some(step) = step else { continue };
            units_advanced += 1;

            if let Some(dest) = &step.arrived {
                events.push(TickEvent::Arrived {
                    code: unit.code.clone(),
                    destination: dest.name.clone(),
                });
            }
            if step.entered_charging {
                events.push(TickEvent::EnteredCharging {
                    code: unit.code.clone(),
                });
            }
            if step.completed_cycle {
                events.push(TickEvent::CycleCompleted {
                    code: unit.code.clone(),
                    cycles: step.patch.cycles,
                });
            }
            updates.push(EntityUpdate::Unit(step.patch));
        }
        let stations_recomputed = station_patches.len();
        updates.extend(station_patches.into_iter().map(EntityUpdate::Station));

        self.store.commit(updates)?;
        self.tick = now.next();

        let report = TickReport {
            tick: now,
            units_advanced,
            stations_recomputed,
            events,
        };
        observer.on_tick_end(now, &report);

        let interval = self.params.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            let committed = self.store.snapshot()?;
            observer.on_snapshot(now, &committed.units, &committed.stations);
        }

        Ok(report)
    }

    /// Run exactly `n` ticks, collecting the per-tick reports.
    pub fn run_ticks<O: TickObserver>(
        &mut self,
        n: u64,
        observer: &mut O,
    ) -> SimResult<Vec<TickReport>> {
        let mut reports = Vec::with_capacity(n as usize);
        for _ in 0..n {
            reports.push(self.run_tick(observer)?);
        }
        observer.on_sim_end(self.tick);
        Ok(reports)
    }
}

// ── Compute phase ─────────────────────────────────────────────────────────────

/// Advance every unit against the shared snapshot.
///
/// With the `parallel` Cargo feature the map runs on Rayon's thread pool;
/// each closure derives its own [`EntityRng`], so ordering of execution
/// cannot affect the draws.
fn compute_unit_steps(
    units:  &[Unit],
    view:   &WorldView<'_>,
    params: &SimParams,
    now:    Tick,
) -> Vec<Option<UnitStep>> {
    let seed = params.seed;

    #[cfg(not(feature = "parallel"))]
    {
        units
            .iter()
            .map(|unit| {
                let mut rng = EntityRng::derive(seed, unit.id.as_str(), now);
                advance_unit(unit, view, params, &mut rng)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        units
            .par_iter()
            .map(|unit| {
                let mut rng = EntityRng::derive(seed, unit.id.as_str(), now);
                advance_unit(unit, view, params, &mut rng)
            })
            .collect()
    }
}

/// Recompute every station's load fields against the shared snapshot.
fn compute_station_patches(
    stations: &[Station],
    view:     &WorldView<'_>,
    params:   &SimParams,
    now:      Tick,
) -> Vec<StationPatch> {
    let seed = params.seed;

    #[cfg(not(feature = "parallel"))]
    {
        stations
            .iter()
            .map(|station| {
                let mut rng = EntityRng::derive(seed, station.id.as_str(), now);
                recompute_station(station, view, params, &mut rng)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        stations
            .par_iter()
            .map(|station| {
                let mut rng = EntityRng::derive(seed, station.id.as_str(), now);
                recompute_station(station, view, params, &mut rng)
            })
            .collect()
    }
}
