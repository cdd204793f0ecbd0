use serde::{Deserialize, Serialize};

/// Performance statistics carried by a player
///
/// Has no identity of its own; it is copied and replaced together with
/// the owning [`Player`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Free-form list of personal records
    #[serde(default)]
    pub personal_records: Vec<String>,
    /// Assists made
    pub assists: f64,
    /// Goals scored
    pub goals_scored: f64,
}

/// A player entry in a team's roster
///
/// The name acts as the roster key for removal. Uniqueness inside a
/// roster is not enforced, so removal by name takes every match.
///
/// # Example
/// ```
/// use rosterkeep_api::domain::team::value_objects::{Player, Statistics};
///
/// let player = Player::new("Alex", "striker", Statistics::default());
/// assert!(player.has_name("Alex"));
/// assert!(!player.has_name("alex"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub statistics: Statistics,
}

impl Player {
    /// Creates a new player
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        statistics: Statistics,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            statistics,
        }
    }

    /// Exact, case-sensitive name match
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_name_match_is_exact() {
        let player = Player::new("Sam", "keeper", Statistics::default());

        assert!(player.has_name("Sam"));
        assert!(!player.has_name("sam"));
        assert!(!player.has_name("Sam "));
    }

    #[test]
    fn player_deserializes_without_statistics() {
        let player: Player = serde_json::from_value(json!({
            "name": "Alex",
            "position": "striker"
        }))
        .unwrap();

        assert_eq!(player.statistics, Statistics::default());
    }

    #[test]
    fn statistics_json_field_names() {
        let stats = Statistics {
            personal_records: vec!["hat-trick".to_string()],
            assists: 1.0,
            goals_scored: 3.0,
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["goals_scored"], 3.0);
        assert_eq!(value["assists"], 1.0);
        assert_eq!(value["personal_records"][0], "hat-trick");
    }
}
