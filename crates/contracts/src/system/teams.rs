use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Team record as delivered by the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: String::new(),
        }
    }

    /// Name shown in the sidebar: the display name when set.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

/// All teams known to the server, keyed by team id.
pub type TeamDirectory = BTreeMap<String, Team>;

/// Teams of the directory ordered by name (ties broken by id).
pub fn teams_by_name(directory: &TeamDirectory) -> Vec<&Team> {
    let mut teams: Vec<&Team> = directory.values().collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    teams
}

/// Team ids that currently have an expanded submenu in the admin sidebar.
///
/// Keeps insertion order so submenus appear in the order teams were added.
/// On the wire it is the `{"<team id>": "true"}` object the console has
/// always exchanged; key order of the incoming object is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedTeams {
    ids: Vec<String>,
}

impl SelectedTeams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the id was already present.
    pub fn insert(&mut self, team_id: impl Into<String>) -> bool {
        let team_id = team_id.into();
        if self.contains(&team_id) {
            return false;
        }
        self.ids.push(team_id);
        true
    }

    /// Returns `false` when the id was not present.
    pub fn remove(&mut self, team_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != team_id);
        self.ids.len() != before
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.ids.iter().any(|id| id == team_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected teams that exist in `directory`, in insertion order.
    /// Ids missing from the directory are skipped but kept in the set.
    pub fn visible_in<'a>(&'a self, directory: &'a TeamDirectory) -> impl Iterator<Item = &'a Team> {
        self.ids.iter().filter_map(move |id| directory.get(id))
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedTeams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = SelectedTeams::new();
        for id in iter {
            selected.insert(id);
        }
        selected
    }
}

impl Serialize for SelectedTeams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ids.len()))?;
        for id in &self.ids {
            map.serialize_entry(id, "true")?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectedTeams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectedTeamsVisitor;

        impl<'de> Visitor<'de> for SelectedTeamsVisitor {
            type Value = SelectedTeams;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by team id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut selected = SelectedTeams::new();
                while let Some((id, _marker)) = access.next_entry::<String, serde_json::Value>()? {
                    selected.insert(id);
                }
                Ok(selected)
            }
        }

        deserializer.deserialize_map(SelectedTeamsVisitor)
    }
}
