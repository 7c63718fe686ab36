//! Utility functions shared by the server services.
//!
//! Provides input validation for playthrough and entry fields and the clock helpers used for
//! timestamp bookkeeping.

pub mod time;
pub mod validate;
