//! gurugram — reference demo for the swapfleet framework.
//!
//! Simulates a battery-swap fleet over the Gurugram corridor: 14 fixed
//! stations (12 Gurugram sectors plus Noida and Faridabad outliers) and a
//! maintenance-managed fleet of 25 mobile units.  Scale comment: swap the
//! station table and `FLEET_TARGET` for a city-wide run.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sf_core::SimParams;
use sf_model::{RawStationRecord, Station, StationStatus, UnitMode};
use sf_output::{CsvWriter, SimOutputObserver};
use sf_sim::Sim;
use sf_store::{FleetStore, MemoryStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const TICKS:          u64 = 50;
const FLEET_TARGET: usize = 25;

// ── Station table ─────────────────────────────────────────────────────────────

// code, name, region, load %, swaps/h, surge, charger health %, status, lat, lng
#[rustfmt::skip]
const STATIONS: &[(&str, &str, &str, f64, f64, f64, f64, StationStatus, f64, f64)] = &[
    ("GUR-SEC10",  "Sector 10 Hub",           "Gurugram",  25.0,  40.0, 1.0,  99.0, StationStatus::Ok,       28.480, 76.990),
    ("GUR-SEC14",  "Sector 14 Grid",          "Gurugram",  45.0,  70.0, 1.1,  94.0, StationStatus::Ok,       28.475, 77.045),
    ("GUR-CYBER",  "Cyber City Hub",          "Gurugram",  75.0, 120.0, 1.8,  85.0, StationStatus::Degraded, 28.500, 77.090),
    ("GUR-SEC31",  "Sector 31 SmartStation",  "Gurugram",  35.0,  50.0, 1.0,  98.0, StationStatus::Ok,       28.445, 77.040),
    ("GUR-SEC45",  "Sector 45 MegaHub",       "Gurugram",  92.0, 160.0, 2.5,  72.0, StationStatus::Critical, 28.435, 77.070),
    ("GUR-SEC56",  "Sector 56 Metro Station", "Gurugram",  65.0,  90.0, 1.4,  88.0, StationStatus::Degraded, 28.420, 77.105),
    ("GUR-GOLF",   "Golf Course Extension",   "Gurugram",  30.0,  35.0, 1.0, 100.0, StationStatus::Ok,       28.395, 77.080),
    ("GUR-UDYOG",  "Udyog Vihar Grid",        "Gurugram",  20.0,  30.0, 1.0,  96.0, StationStatus::Ok,       28.515, 77.075),
    ("GUR-DLF3",   "DLF Phase 3 Hub",         "Gurugram",  55.0,  80.0, 1.2,  91.0, StationStatus::Ok,       28.490, 77.100),
    ("GUR-MEDIC",  "Medicity Radar",          "Gurugram",  15.0,  25.0, 1.0,  99.0, StationStatus::Ok,       28.435, 77.045),
    ("GUR-SOHNA",  "Sohna Road Grid",         "Gurugram",  40.0,  55.0, 1.1,  93.0, StationStatus::Ok,       28.400, 77.035),
    ("GUR-MGROAD", "MG Road Metro",           "Gurugram",  50.0,  75.0, 1.1,  95.0, StationStatus::Ok,       28.475, 77.085),
    ("NOI-01",     "Noida Central",           "Noida",     88.0, 125.0, 1.9,  82.0, StationStatus::Critical, 28.580, 77.330),
    ("FAR-01",     "Faridabad North",         "Faridabad", 28.0,  35.0, 1.0,  97.0, StationStatus::Ok,       28.400, 77.310),
];

fn seed_stations() -> Result<Vec<Station>> {
    STATIONS
        .iter()
        .map(|&(code, name, region, load_pct, swap_rate, surge_price, charger_health, status, lat, lng)| {
            let station = Station::from_record(RawStationRecord {
                id: code.to_lowercase(),
                code: code.to_owned(),
                name: name.to_owned(),
                region: region.to_owned(),
                lat,
                lng,
                swap_rate,
                charger_health,
                load_pct,
                surge_price,
                status,
                thermal: 28.0,
                queue_count: 0,
            })?;
            Ok(station)
        })
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== gurugram — swapfleet demo ===");
    println!("Stations: {}  |  Fleet: {FLEET_TARGET}  |  Seed: {SEED}", STATIONS.len());
    println!();

    // 1. Seed the store with the station network; maintenance creates units.
    let stations = seed_stations()?;
    let store = MemoryStore::seeded(vec![], stations)?;

    // 2. Sim parameters.
    let params = SimParams {
        seed: SEED,
        fleet_target: FLEET_TARGET,
        ..SimParams::default()
    };
    let mut sim = Sim::new(store, params)?;

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/gurugram")?;
    let writer = CsvWriter::new(Path::new("output/gurugram"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let reports = sim.run_ticks(TICKS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Event log.
    for report in &reports {
        for line in report.lines() {
            println!("{line}");
        }
    }
    println!();
    println!("Simulation complete in {:.3} s ({TICKS} ticks)", elapsed.as_secs_f64());
    println!();

    // 6. Final station load table.
    let snapshot = sim.store.snapshot()?;
    println!("{:<12} {:<8} {:<8} {:<10} {:<8} {:<6}", "Station", "Load %", "Surge", "Status", "Therm", "Queue");
    println!("{}", "-".repeat(56));
    for s in &snapshot.stations {
        println!(
            "{:<12} {:<8.1} {:<8.2} {:<10} {:<8.1} {:<6}",
            s.code, s.load_pct, s.surge_price, s.status.to_string(), s.thermal, s.queue_count,
        );
    }
    println!();

    // 7. Fleet charge summary.
    let charging = snapshot.units.iter().filter(|u| u.mode == UnitMode::Charging).count();
    let mean_soc =
        snapshot.units.iter().map(|u| u.soc).sum::<f64>() / snapshot.units.len().max(1) as f64;
    println!(
        "Fleet: {} units  |  charging: {charging}  |  mean charge: {mean_soc:.1} %",
        snapshot.units.len()
    );

    Ok(())
}
