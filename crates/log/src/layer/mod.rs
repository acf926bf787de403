//! `tracing` integration

mod pipeline;

pub use pipeline::PipelineLayer;
