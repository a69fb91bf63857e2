//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row
//! - A `Deserialize` create DTO for inserts (unknown keys rejected)
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - The [`Entity`](crate::entity::Entity) impl describing the table

pub mod association;
pub mod organization;
pub mod person;
pub mod work;
