//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - Header management
//! - HTTP interceptors
//! - The transport abstraction and its reqwest implementation

pub mod headers;
pub mod interceptor;
pub mod transport;

pub use headers::*;
pub use interceptor::*;
pub use transport::*;
