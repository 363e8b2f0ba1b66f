//! Application composition.
//!
//! This module provides the concrete implementation of the Application trait,
//! wiring the loaded rate table and the process-wide operation log together
//! for the HTTP boundary.

use fx_core::models::{CurrencyConverter, OperationLog, RateTable};
use fx_core::ports::Application;
use std::sync::Arc;

/// Main application implementation combining all system components.
///
/// The converter and the operation log exist exactly once per process; the
/// state handed to each request handler is a cheap clone of the two shared
/// handles, so every handler observes the same log.
#[derive(Clone)]
pub struct DemoApp {
    converter: Arc<CurrencyConverter>,
    operations: Arc<OperationLog>,
}

impl DemoApp {
    /// Compose the service over an already-loaded rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            converter: Arc::new(CurrencyConverter::new(rates)),
            operations: Arc::new(OperationLog::new()),
        }
    }
}

impl Application for DemoApp {
    fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    fn operations(&self) -> &OperationLog {
        &self.operations
    }
}
