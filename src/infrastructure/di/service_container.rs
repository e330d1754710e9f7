//! Service container for dependency injection
//!
//! Wires up registry, dispatcher and verb handlers.

use std::sync::Arc;

use crate::application::services::{LineRemovalService, TextReplaceService};
use crate::application::verbs::{IN_FILE_REPLACE, REMOVE_LINES};
use crate::application::{Dispatcher, HandlerTable, VerbRegistry};
use crate::config::Settings;
use crate::infrastructure::traits::{FileService, RealFileService};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Read-only verb schemas
    pub registry: Arc<VerbRegistry>,

    pub dispatcher: Dispatcher,

    pub handlers: HandlerTable,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let fs = Arc::new(RealFileService::new(settings.line_ending));
        Self::with_deps(settings, fs)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileService>) -> InfraResult<Self> {
        let registry = Arc::new(VerbRegistry::builtin().map_err(InfraError::Registry)?);
        let dispatcher = Dispatcher::new(Arc::clone(&registry), settings.delimiter());

        let mut handlers = HandlerTable::new();
        handlers.insert(
            IN_FILE_REPLACE,
            Arc::new(TextReplaceService::new(Arc::clone(&fs), settings.line_ending)),
        );
        handlers.insert(
            REMOVE_LINES,
            Arc::new(LineRemovalService::new(Arc::clone(&fs))),
        );

        Ok(Self {
            settings: Arc::new(settings),
            registry,
            dispatcher,
            handlers,
        })
    }
}
