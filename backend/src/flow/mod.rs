// backend/src/flow/mod.rs

//! A small step pipeline used to run multi-stage request workflows.
//!
//! A `Pipeline<TData, Err>` is an ordered list of named steps. Each step owns
//! one or more async handlers that operate on a shared `ContextData<TData>`
//! and decide whether the run continues or stops.

pub mod context_data;
pub mod control;
pub mod error;
pub mod pipeline;
pub mod step;

pub use context_data::ContextData;
pub use control::{PipelineControl, PipelineResult};
pub use error::FlowError;
pub use pipeline::{Handler, Pipeline};
pub use step::{SkipCondition, StepDef};
