//! Team roster service
//!
//! Business rules over an [`OrderedStore`] of teams: input validation,
//! name uniqueness, owner-only mutation and timestamping.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use super::errors::{TeamServiceError, TeamServiceResult};
use crate::domain::caller::CallerId;
use crate::domain::providers::{Clock, IdGenerator};
use crate::domain::repositories::{OrderedStore, StoreError};
use crate::domain::team::{Player, Team, TeamEvent};
use crate::infrastructure::providers::{SystemClock, UuidGenerator};

/// Record count and encoded size of the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub records: usize,
    pub total_bytes: usize,
}

/// Team service for managing rosters
///
/// Reads share the store; each mutating operation holds the write lock
/// across its whole lookup, check and write sequence.
pub struct TeamService<S> {
    store: RwLock<S>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<S: OrderedStore<Team>> TeamService<S> {
    /// Create a service using the system clock and UUID ids
    pub fn new(store: S) -> Self {
        Self::with_providers(store, Arc::new(SystemClock::new()), Arc::new(UuidGenerator))
    }

    /// Create a service with explicit clock and id source
    pub fn with_providers(store: S, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: RwLock::new(store),
            clock,
            ids,
        }
    }

    /// Create a team owned by `caller`
    ///
    /// `roster` may be empty but must be present.
    pub fn create_team(
        &self,
        caller: CallerId,
        name: String,
        sport_type: String,
        roster: Option<Vec<Player>>,
    ) -> TeamServiceResult<Team> {
        let roster = roster
            .ok_or_else(|| TeamServiceError::InvalidInput("Roster is required".to_string()))?;

        let mut store = self.write_store()?;

        let (team, event) = Team::new(
            self.ids.next_id(),
            caller,
            name,
            sport_type,
            roster,
            self.clock.now(),
        )
        .map_err(TeamServiceError::InvalidInput)?;

        if store.values()?.iter().any(|t| t.name() == team.name()) {
            return Err(TeamServiceError::DuplicateName(team.name().to_string()));
        }

        store.insert(team.id().to_string(), &team)?;
        record(&event, &*store);

        Ok(team)
    }

    /// Get a team by ID
    pub fn get_team(&self, id: &str) -> TeamServiceResult<Team> {
        debug!(team_id = %id, "Fetching team");

        self.read_store()?
            .get(id)?
            .ok_or_else(|| TeamServiceError::NotFound(id.to_string()))
    }

    /// All teams, in store key order
    pub fn get_all_teams(&self) -> TeamServiceResult<Vec<Team>> {
        let teams = self.read_store()?.values()?;
        debug!(count = teams.len(), "Listing teams");

        Ok(teams)
    }

    /// Replace a team's roster wholesale
    pub fn update_team(
        &self,
        caller: CallerId,
        id: &str,
        roster: Vec<Player>,
    ) -> TeamServiceResult<Team> {
        let mut store = self.write_store()?;
        let mut team = owned_team(&*store, &caller, id)?;

        let event = team.replace_roster(roster, self.clock.now());
        store.insert(team.id().to_string(), &team)?;
        record(&event, &*store);

        Ok(team)
    }

    /// Delete a team, returning its last state
    pub fn delete_team(&self, caller: CallerId, id: &str) -> TeamServiceResult<Team> {
        let mut store = self.write_store()?;
        let team = owned_team(&*store, &caller, id)?;

        let removed = store.remove(id)?.unwrap_or(team);
        record(
            &TeamEvent::Deleted {
                team_id: removed.id().to_string(),
            },
            &*store,
        );

        Ok(removed)
    }

    /// Append a player to a team's roster
    pub fn add_player_to_team(
        &self,
        caller: CallerId,
        team_id: &str,
        player: Player,
    ) -> TeamServiceResult<Team> {
        let mut store = self.write_store()?;
        let mut team = owned_team(&*store, &caller, team_id)?;

        let event = team.add_player(player, self.clock.now());
        store.insert(team.id().to_string(), &team)?;
        record(&event, &*store);

        Ok(team)
    }

    /// Remove every roster entry named `player_name`
    pub fn delete_player_to_team(
        &self,
        caller: CallerId,
        team_id: &str,
        player_name: &str,
    ) -> TeamServiceResult<Team> {
        let mut store = self.write_store()?;
        let mut team = owned_team(&*store, &caller, team_id)?;

        let event = team
            .remove_players_named(player_name, self.clock.now())
            .ok_or_else(|| TeamServiceError::PlayerNotFound {
                team_id: team_id.to_string(),
                player_name: player_name.to_string(),
            })?;
        store.insert(team.id().to_string(), &team)?;
        record(&event, &*store);

        Ok(team)
    }

    /// Current size of the backing store
    pub fn store_stats(&self) -> TeamServiceResult<StoreStats> {
        let store = self.read_store()?;
        Ok(StoreStats {
            records: store.len(),
            total_bytes: store.total_bytes(),
        })
    }

    fn read_store(&self) -> TeamServiceResult<RwLockReadGuard<'_, S>> {
        self.store
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write_store(&self) -> TeamServiceResult<RwLockWriteGuard<'_, S>> {
        self.store
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

/// Looks up a team and checks that `caller` owns it
fn owned_team<S: OrderedStore<Team>>(
    store: &S,
    caller: &CallerId,
    id: &str,
) -> TeamServiceResult<Team> {
    let team = store
        .get(id)?
        .ok_or_else(|| TeamServiceError::NotFound(id.to_string()))?;

    if !team.is_owned_by(caller) {
        warn!(team_id = %id, caller = %caller, "Rejected mutation by non-owner");
        return Err(TeamServiceError::Unauthorized {
            team_id: id.to_string(),
        });
    }

    Ok(team)
}

fn record<S: OrderedStore<Team>>(event: &TeamEvent, store: &S) {
    info!(event = event.kind(), team_id = %event.team_id(), "{:?}", event);
    debug!(
        records = store.len(),
        total_bytes = store.total_bytes(),
        "Store updated"
    );
}
