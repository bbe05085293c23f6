//! CLI command implementations.

pub mod export;
pub mod reconcile;

pub use export::ExportCommand;
pub use reconcile::ReconcileCommand;
