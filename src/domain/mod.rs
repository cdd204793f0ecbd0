// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod caller;
pub mod providers;
pub mod repositories;
pub mod team;
