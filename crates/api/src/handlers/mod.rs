pub mod association;
pub mod organization;
pub mod person;
pub mod work;
