//! HTTP protocol layer module
//!
//! Response builders, CORS injection, MIME table, and `ETag` helpers,
//! decoupled from request-dispatch logic.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_file_response,
    build_options_response,
};
