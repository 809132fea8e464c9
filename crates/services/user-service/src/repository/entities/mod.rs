//! SeaORM entities for the relational schema.

pub mod organization;
pub mod school;
pub mod user;
