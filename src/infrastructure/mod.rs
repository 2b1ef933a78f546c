pub mod endpoints;
pub mod stores;
