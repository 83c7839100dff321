//! Library side of the `ortho-unify` command: logging setup and the
//! load, convert, write pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
