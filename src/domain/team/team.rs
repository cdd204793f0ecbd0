use super::events::TeamEvent;
use super::value_objects::Player;
use crate::domain::caller::CallerId;
use crate::domain::repositories::Storable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team aggregate root
///
/// A named team owning an embedded roster of players. Only the caller
/// recorded as `owner` at creation may mutate it.
///
/// # Invariants
/// - Name and sport type cannot be empty
/// - `id`, `owner`, `name` and `created_at` never change after creation
/// - `updated_at` is absent until the first mutation, then holds the time
///   of the latest one
///
/// # Example
/// ```
/// use chrono::Utc;
/// use rosterkeep_api::domain::caller::CallerId;
/// use rosterkeep_api::domain::team::Team;
/// use uuid::Uuid;
///
/// let (team, event) = Team::new(
///     "team-1".to_string(),
///     CallerId::new(Uuid::new_v4()),
///     "Hawks".to_string(),
///     "soccer".to_string(),
///     Vec::new(),
///     Utc::now(),
/// ).expect("valid team");
///
/// assert_eq!(team.name(), "Hawks");
/// assert!(team.updated_at().is_none());
/// assert_eq!(event.team_id(), "team-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: String,
    owner: CallerId,
    name: String,
    sport_type: String,
    roster: Vec<Player>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Storable for Team {}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `id` - Freshly generated identifier
    /// * `owner` - The creating caller
    /// * `name` - Team name (cannot be blank)
    /// * `sport_type` - Sport the team plays (cannot be blank)
    /// * `roster` - Initial roster, possibly empty
    /// * `created_at` - Creation time
    ///
    /// # Returns
    /// * `Ok((Team, TeamEvent))` - New team and its Created event
    /// * `Err(String)` - If a field is blank
    pub fn new(
        id: String,
        owner: CallerId,
        name: String,
        sport_type: String,
        roster: Vec<Player>,
        created_at: DateTime<Utc>,
    ) -> Result<(Self, TeamEvent), String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if sport_type.trim().is_empty() {
            return Err("Sport type cannot be empty".to_string());
        }

        let team = Self {
            id,
            owner,
            name,
            sport_type,
            roster,
            created_at,
            updated_at: None,
        };

        let event = TeamEvent::Created {
            team_id: team.id.clone(),
            name: team.name.clone(),
            owner: team.owner,
        };

        Ok((team, event))
    }

    /// Whether `caller` is the recorded owner
    pub fn is_owned_by(&self, caller: &CallerId) -> bool {
        self.owner == *caller
    }

    /// Replaces the roster wholesale
    pub fn replace_roster(&mut self, roster: Vec<Player>, now: DateTime<Utc>) -> TeamEvent {
        self.roster = roster;
        self.updated_at = Some(now);

        TeamEvent::RosterReplaced {
            team_id: self.id.clone(),
            roster_size: self.roster.len(),
        }
    }

    /// Appends a player to the end of the roster
    ///
    /// Players sharing a name with an existing entry are accepted.
    pub fn add_player(&mut self, player: Player, now: DateTime<Utc>) -> TeamEvent {
        let player_name = player.name.clone();
        self.roster.push(player);
        self.updated_at = Some(now);

        TeamEvent::PlayerAdded {
            team_id: self.id.clone(),
            player_name,
        }
    }

    /// Drops every roster entry named `name`
    ///
    /// # Returns
    /// * `Some(TeamEvent)` - At least one player was removed
    /// * `None` - No player has that name; the team is left untouched
    pub fn remove_players_named(&mut self, name: &str, now: DateTime<Utc>) -> Option<TeamEvent> {
        let before = self.roster.len();
        if !self.roster.iter().any(|p| p.has_name(name)) {
            return None;
        }

        self.roster.retain(|p| !p.has_name(name));
        self.updated_at = Some(now);

        Some(TeamEvent::PlayersRemoved {
            team_id: self.id.clone(),
            player_name: name.to_string(),
            removed: before - self.roster.len(),
        })
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identity that created the team
    pub fn owner(&self) -> CallerId {
        self.owner
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sport type
    pub fn sport_type(&self) -> &str {
        &self.sport_type
    }

    /// Returns the roster in insertion order
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time of the latest mutation, if any
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
