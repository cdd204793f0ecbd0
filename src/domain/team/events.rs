use crate::domain::caller::CallerId;

/// Domain events that occur within the Team aggregate
///
/// Every successful mutation of a team yields exactly one event. The
/// service layer records them as structured audit log lines.
///
/// # Example
/// ```
/// use rosterkeep_api::domain::caller::CallerId;
/// use rosterkeep_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Created {
///     team_id: "team-1".to_string(),
///     name: "Hawks".to_string(),
///     owner: CallerId::new(Uuid::new_v4()),
/// };
/// assert_eq!(event.team_id(), "team-1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        team_id: String,
        name: String,
        owner: CallerId,
    },
    /// Fired when the roster is replaced wholesale
    RosterReplaced { team_id: String, roster_size: usize },
    /// Fired when a player is appended to the roster
    PlayerAdded { team_id: String, player_name: String },
    /// Fired when every roster entry with a given name is dropped
    PlayersRemoved {
        team_id: String,
        player_name: String,
        removed: usize,
    },
    /// Fired when the team is removed from the store
    Deleted { team_id: String },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> &str {
        match self {
            TeamEvent::Created { team_id, .. } => team_id,
            TeamEvent::RosterReplaced { team_id, .. } => team_id,
            TeamEvent::PlayerAdded { team_id, .. } => team_id,
            TeamEvent::PlayersRemoved { team_id, .. } => team_id,
            TeamEvent::Deleted { team_id } => team_id,
        }
    }

    /// Short name used as the `event` field in logs
    pub fn kind(&self) -> &'static str {
        match self {
            TeamEvent::Created { .. } => "team_created",
            TeamEvent::RosterReplaced { .. } => "roster_replaced",
            TeamEvent::PlayerAdded { .. } => "player_added",
            TeamEvent::PlayersRemoved { .. } => "players_removed",
            TeamEvent::Deleted { .. } => "team_deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_id_for_every_variant() {
        let events = vec![
            TeamEvent::Created {
                team_id: "t".to_string(),
                name: "Hawks".to_string(),
                owner: CallerId::new(uuid::Uuid::new_v4()),
            },
            TeamEvent::RosterReplaced {
                team_id: "t".to_string(),
                roster_size: 0,
            },
            TeamEvent::PlayerAdded {
                team_id: "t".to_string(),
                player_name: "Alex".to_string(),
            },
            TeamEvent::PlayersRemoved {
                team_id: "t".to_string(),
                player_name: "Sam".to_string(),
                removed: 2,
            },
            TeamEvent::Deleted {
                team_id: "t".to_string(),
            },
        ];

        for event in &events {
            assert_eq!(event.team_id(), "t");
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let a = TeamEvent::Deleted {
            team_id: "t".to_string(),
        };
        let b = TeamEvent::PlayerAdded {
            team_id: "t".to_string(),
            player_name: "Alex".to_string(),
        };

        assert_eq!(a.kind(), "team_deleted");
        assert_ne!(a.kind(), b.kind());
    }
}
