/// Data layer: energy table types, loading, and analysis.
///
/// Architecture:
/// ```text
///  podEnergy.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → EnergyTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ EnergyTable │  four columns, one entry per basis mode
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ analysis  │  summary figures, invariant warnings
///   └──────────┘
/// ```

pub mod analysis;
pub mod loader;
pub mod model;
