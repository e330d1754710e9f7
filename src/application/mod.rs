//! Application layer: registry, dispatch and verb services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod dispatch;
pub mod error;
pub mod error_ext;
pub mod handler;
pub mod registry;
pub mod services;
pub mod verbs;

pub use dispatch::{command_for, Dispatcher};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use handler::{ExitOutcome, HandlerTable, VerbHandler};
pub use registry::{base_options, VerbRegistry};
