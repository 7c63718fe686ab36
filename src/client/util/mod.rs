#[cfg(feature = "web")]
pub mod api;
#[cfg(any(feature = "web", feature = "server"))]
pub mod error;
pub mod format;
