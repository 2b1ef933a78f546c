pub mod users;
pub mod workspace;
