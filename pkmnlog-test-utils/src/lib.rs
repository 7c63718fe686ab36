//! Test utilities for PkmnLog.
//!
//! Tests are set up in two phases:
//!
//! 1. **Declare** the environment with [`TestBuilder`]: which tables exist and which
//!    playthroughs and entries are inserted up front.
//! 2. **Execute** against the returned [`TestContext`], which owns an in-memory SQLite
//!    database and exposes fixture helpers for inserting further records mid-test.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
