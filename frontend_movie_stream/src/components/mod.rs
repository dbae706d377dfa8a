pub mod auth_guard;
pub mod header;
pub mod movie;
pub mod movies;
