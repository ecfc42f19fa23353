use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Attendance for one day. `Office` is the implicit default: only the other
/// two are ever stored as overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Office,
    Smart,
    Away,
}

impl AttendanceStatus {
    /// Successor in the click cycle: office -> smart -> away -> office.
    pub fn next(self) -> Self {
        match self {
            Self::Office => Self::Smart,
            Self::Smart => Self::Away,
            Self::Away => Self::Office,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Smart => "smart",
            Self::Away => "away",
        }
    }

    /// One-character marker shown in a grid cell.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Office => "",
            Self::Smart => "S",
            Self::Away => "A",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Office => "status-office",
            Self::Smart => "status-smart",
            Self::Away => "status-away",
        }
    }
}

/// Wire form of a single stored override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOverride {
    pub user_id: i64,
    pub day: NaiveDate,
    pub status: AttendanceStatus,
}

/// Sparse override set keyed by (user id, day). Absence means office.
pub type OverrideMap = BTreeMap<(i64, NaiveDate), AttendanceStatus>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub users: Vec<TeamMember>,
    #[serde(default, with = "override_entries")]
    pub overrides: OverrideMap,
}

impl AppData {
    pub fn users_by_name(&self) -> Vec<TeamMember> {
        let mut users = self.users.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        users
    }

    pub fn add_user(&mut self, name: String, email: String) -> TeamMember {
        let id = self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        let user = TeamMember { id, name, email };
        self.users.push(user.clone());
        user
    }

    pub fn overrides_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<ScheduleOverride> {
        self.overrides
            .iter()
            .filter(|((_, day), _)| *day >= start && *day <= end)
            .map(|((user_id, day), status)| ScheduleOverride {
                user_id: *user_id,
                day: *day,
                status: *status,
            })
            .collect()
    }

    /// Applies one schedule change. Office clears the stored entry, anything
    /// else is inserted or replaced. Returns the surviving entry, if any.
    pub fn apply_override(&mut self, update: ScheduleUpdate) -> Option<ScheduleOverride> {
        let key = (update.user_id, update.day);
        if update.status == AttendanceStatus::Office {
            self.overrides.remove(&key);
            return None;
        }

        self.overrides.insert(key, update.status);
        Some(ScheduleOverride {
            user_id: update.user_id,
            day: update.day,
            status: update.status,
        })
    }
}

/// Persists the tuple-keyed override map as a flat entry list. Office rows
/// in a hand-edited file are dropped on load to keep the map sparse.
mod override_entries {
    use super::{AttendanceStatus, OverrideMap, ScheduleOverride};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(map: &OverrideMap, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<ScheduleOverride> = map
            .iter()
            .map(|((user_id, day), status)| ScheduleOverride {
                user_id: *user_id,
                day: *day,
                status: *status,
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OverrideMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<ScheduleOverride>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.status != AttendanceStatus::Office)
            .map(|entry| ((entry.user_id, entry.day), entry.status))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScheduleUpdate {
    pub user_id: i64,
    pub day: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PlanningCell {
    pub day: NaiveDate,
    pub status: AttendanceStatus,
    pub glyph: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlanningRow {
    pub user_id: i64,
    pub name: String,
    pub cells: Vec<PlanningCell>,
}

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub count: u32,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekStats {
    pub office: StatusCount,
    pub smart: StatusCount,
    pub away: StatusCount,
}

#[derive(Debug, Serialize)]
pub struct WindowNav {
    pub prev_anchor: NaiveDate,
    pub prev_enabled: bool,
    pub next_anchor: NaiveDate,
    pub next_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanningView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub range_label: String,
    pub days: Vec<DayColumn>,
    pub rows: Vec<PlanningRow>,
    pub stats: WeekStats,
    pub nav: WindowNav,
}
