//! Per-tick outcome reporting.

use std::fmt;

use sf_core::Tick;

/// A notable event observed during one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickEvent {
    /// Fleet maintenance topped the fleet up by `added` units.
    FleetBoosted { added: usize },
    /// The sentinel unit was missing and has been respawned.
    SentinelSpawned { code: String },
    /// A unit reached its assigned destination.
    Arrived {
        code: String,
        destination: Option<String>,
    },
    /// A unit drained below the entry threshold and plugged in.
    EnteredCharging { code: String },
    /// A unit finished charging and returned to service.
    CycleCompleted { code: String, cycles: u32 },
    /// No stations are registered; seek and economy steering are inert.
    NoStations,
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::FleetBoosted { added } => {
                write!(f, "fleet boosted: +{added} units")
            }
            TickEvent::SentinelSpawned { code } => {
                write!(f, "spawned sentinel unit {code}")
            }
            TickEvent::Arrived { code, destination } => match destination {
                Some(name) => write!(f, "{code} arrived at {name}"),
                None => write!(f, "{code} arrived at destination"),
            },
            TickEvent::EnteredCharging { code } => {
                write!(f, "{code} entered charging")
            }
            TickEvent::CycleCompleted { code, cycles } => {
                write!(f, "{code} completed charge cycle #{cycles}")
            }
            TickEvent::NoStations => {
                write!(f, "no stations registered; steering policy is inert")
            }
        }
    }
}

/// Summary of one committed tick.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub tick: Tick,
    /// Units that produced a patch (faulty and unplaced units are excluded).
    pub units_advanced: usize,
    pub stations_recomputed: usize,
    pub events: Vec<TickEvent>,
}

impl TickReport {
    /// Human-readable event lines, one per event, prefixed with the tick.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| format!("{}: {e}", self.tick))
            .collect()
    }
}
