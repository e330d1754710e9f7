//! cltools: file and data manipulation utilities behind one verb-dispatching CLI
//!
//! Layers, innermost first:
//! - [`domain`]: verb/parameter schemas, parsed invocations, list codec
//! - [`application`]: schema registry, dispatcher, verb services
//! - [`infrastructure`]: file access and service wiring
//! - [`cli`]: command flow, usage rendering, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
