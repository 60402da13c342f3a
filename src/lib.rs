//! Calculation engine for multi-module ESG questionnaires.
//!
//! The engine is a registry of per-module calculators behind one dispatcher.
//! Each invocation is a pure, synchronous function from questionnaire input
//! to a [`ModuleResult`]: no I/O, no shared mutable state, nothing persisted.
//! Callers keep the raw inputs and recompute results whenever they need
//! them; a result is never the source of truth.

pub mod config;
pub mod engine;
pub mod error;
pub mod factors;
pub mod modules;
pub mod snapshot;
pub mod telemetry;

pub use engine::input::QuestionnaireInput;
pub use engine::result::ModuleResult;
pub use engine::{run_all, run_module, EngineError, ModuleId};
