//! Milestone Entity
//!
//! A titled, dated work item with a completion status.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Entity, SaveOp};
use crate::status::resolve_status;

/// Status as persisted by the server. Overdue is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoredStatus {
    #[default]
    Pending,
    Completed,
}

impl StoredStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredStatus::Pending => "Pending",
            StoredStatus::Completed => "Completed",
        }
    }

    /// Pending <-> Completed
    pub fn toggled(self) -> Self {
        match self {
            StoredStatus::Pending => StoredStatus::Completed,
            StoredStatus::Completed => StoredStatus::Pending,
        }
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveStatus {
    Pending,
    Completed,
    Overdue,
}

impl EffectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Pending => "Pending",
            EffectiveStatus::Completed => "Completed",
            EffectiveStatus::Overdue => "Overdue",
        }
    }
}

impl From<StoredStatus> for EffectiveStatus {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Pending => EffectiveStatus::Pending,
            StoredStatus::Completed => EffectiveStatus::Completed,
        }
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A milestone the server already knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Server-assigned identifier (numeric ids are accepted and kept as text)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    /// Calendar day, `YYYY-MM-DD`
    pub due_date: String,
    pub status: StoredStatus,
}

impl Milestone {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due_date: impl Into<String>,
        status: StoredStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: due_date.into(),
            status,
        }
    }

    pub fn with_status(mut self, status: StoredStatus) -> Self {
        self.status = status;
        self
    }

    /// Copy with completion flipped, ready to be saved
    pub fn toggled(&self) -> Self {
        self.clone().with_status(self.status.toggled())
    }

    pub fn effective_status(&self, today: NaiveDate) -> EffectiveStatus {
        resolve_status(self.status, &self.due_date, today)
    }
}

impl Entity for Milestone {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// A milestone that has not been created yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub title: String,
    pub due_date: String,
    pub status: StoredStatus,
}

impl NewMilestone {
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
            status: StoredStatus::Pending,
        }
    }
}

/// What gets saved: the variant decides create vs update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MilestoneRecord {
    New(NewMilestone),
    Existing(Milestone),
}

impl MilestoneRecord {
    /// Build a record from loose parts. A missing or empty id means "new".
    pub fn from_parts(
        id: Option<String>,
        title: impl Into<String>,
        due_date: impl Into<String>,
        status: StoredStatus,
    ) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => MilestoneRecord::Existing(Milestone::new(id, title, due_date, status)),
            None => MilestoneRecord::New(NewMilestone {
                title: title.into(),
                due_date: due_date.into(),
                status,
            }),
        }
    }

    pub fn op(&self) -> SaveOp {
        match self {
            MilestoneRecord::New(_) => SaveOp::Create,
            MilestoneRecord::Existing(_) => SaveOp::Update,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            MilestoneRecord::New(_) => None,
            MilestoneRecord::Existing(m) => Some(&m.id),
        }
    }
}

impl From<Milestone> for MilestoneRecord {
    fn from(milestone: Milestone) -> Self {
        MilestoneRecord::Existing(milestone)
    }
}

impl From<NewMilestone> for MilestoneRecord {
    fn from(milestone: NewMilestone) -> Self {
        MilestoneRecord::New(milestone)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
