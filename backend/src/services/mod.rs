//! High-level services built on top of the transformations.

pub mod pipeline;


pub use pipeline::{run_catalog_pipeline, run_pipeline, PipelineOutput, PipelineRequest, StarQuery};
