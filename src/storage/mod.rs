//! Workspace and tenant storage sizing
//!
//! The accessor, its configuration and records, managed context detection,
//! and the command handlers that drive it from the CLI.

mod accessor;
mod commands;
pub mod probe;
mod records;
mod settings;

pub use accessor::{FallbackReason, StorageAccessor};
pub use commands::{build_accessor, run_command};
pub use probe::{detect_managed_context, environment_probe, fixed_probe, ContextProbe};
pub use records::WorkspaceRecord;
pub use settings::{AuthMethod, StorageConfig};
