//! Plain data row types written by output backends.

/// A snapshot of one unit's state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSnapshotRow {
    pub unit_id: String,
    pub code:    String,
    pub tick:    u64,
    /// `None` for units that have never been placed.
    pub lat:     Option<f64>,
    pub lng:     Option<f64>,
    pub soc:     f64,
    pub soh:     f64,
    /// Operating mode as its lowercase wire name.
    pub mode:    String,
    pub voltage: f64,
    pub speed:   f64,
    pub cycles:  u32,
}

/// A snapshot of one station's computed state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSnapshotRow {
    pub station_id:  String,
    pub code:        String,
    pub tick:        u64,
    pub load_pct:    f64,
    pub surge_price: f64,
    /// Status as its lowercase wire name.
    pub status:      String,
    pub thermal:     f64,
    pub queue_count: u32,
}

/// Summary statistics for one committed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    pub units_advanced:      u64,
    pub stations_recomputed: u64,
    pub events:              u64,
}
