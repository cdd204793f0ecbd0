use std::sync::Arc;

use crate::domain::team::Team;
use crate::infrastructure::repositories::BTreeStore;
use crate::services::TeamService;

/// Store backing the HTTP service
pub type TeamStore = BTreeStore<Team>;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamService<TeamStore>>,
    /// HS256 secret for bearer token verification
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(teams: TeamService<TeamStore>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            teams: Arc::new(teams),
            jwt_secret: jwt_secret.into(),
        }
    }
}
