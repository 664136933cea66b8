pub mod config;
pub mod logging;

pub mod archive;
pub mod artifact;
pub mod collector;
pub mod domains;
pub mod error;
pub mod extract;
pub mod pipeline;

pub use error::HawkError;
