//! SeaORM entities for the playthrough log schema.

pub mod prelude;

pub mod entry;
pub mod playthrough;
pub mod sea_orm_active_enums;
