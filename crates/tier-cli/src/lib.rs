//! Library side of the `tier` binary: logging setup and file-level glue.

pub mod logging;
pub mod pipeline;
