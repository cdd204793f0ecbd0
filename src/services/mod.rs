// Application services
//
// Business logic over the domain storage ports.

pub mod errors;
pub mod team_service;

pub use errors::{TeamServiceError, TeamServiceResult};
pub use team_service::{StoreStats, TeamService};
