//! Domain layer: schema data and parsed invocations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod invocation;
pub mod list;
pub mod schema;

pub use error::{ConflictKind, DomainError, DomainResult};
pub use invocation::{ParsedInvocation, DEBUG_LOG, VERBOSE};
pub use list::{join_escaped, split_escaped, DEFAULT_DELIMITER};
pub use schema::{ParameterKind, ParameterSpec, ParameterValue, VerbSchema};
