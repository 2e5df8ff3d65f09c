//! Integration layer wiring the pipeline crates into the CLI.

pub(crate) mod report_pipeline;
