//! tw-engine - The Tideway migration engine.
//!
//! Ties the pieces together: migration definitions and the registry that
//! resolves them, the loader, the orchestrator state machine driving
//! `up()`/`down()` execution, the scaffold generator, and the status
//! reporter.

pub mod definition;
pub mod error;
pub mod loader;
pub mod orchestrator;
pub mod prompt;
pub mod report;
pub mod scaffold;

pub use definition::{Definition, DefinitionRegistry};
pub use error::{EngineError, EngineResult};
pub use loader::Loader;
pub use orchestrator::Orchestrator;
pub use prompt::{Interaction, NonInteractive};
pub use report::{build_status, RowState, StatusRow};
pub use scaffold::{Scaffolded, ScaffoldGenerator, INDEX_FILE};
