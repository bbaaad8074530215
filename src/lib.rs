//! Budget Tracker offers a minimal personal expense ledger with flat-file
//! JSON persistence and an interactive console shell.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
