//! Types shared between the server and the browser client.

pub mod api;
pub mod playthrough;
