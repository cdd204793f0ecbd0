// Infrastructure layer module
// Contains storage adapters and environment primitives
// Follows Hexagonal Architecture

pub mod providers;
pub mod repositories;
