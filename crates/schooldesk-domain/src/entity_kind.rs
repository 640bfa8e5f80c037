use schooldesk_core::SchoolDeskError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The record lists the administration screens manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Roles,
    Students,
    Teachers,
    Parents,
    Distinctions,
    CountryCodes,
    Schools,
    Classes,
    Divisions,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Roles,
        EntityKind::Students,
        EntityKind::Teachers,
        EntityKind::Parents,
        EntityKind::Distinctions,
        EntityKind::CountryCodes,
        EntityKind::Schools,
        EntityKind::Classes,
        EntityKind::Divisions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Roles => "roles",
            EntityKind::Students => "students",
            EntityKind::Teachers => "teachers",
            EntityKind::Parents => "parents",
            EntityKind::Distinctions => "distinctions",
            EntityKind::CountryCodes => "country-codes",
            EntityKind::Schools => "schools",
            EntityKind::Classes => "classes",
            EntityKind::Divisions => "divisions",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = SchoolDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(EntityKind::as_str).collect();
                SchoolDeskError::Validation(format!(
                    "unknown record kind '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}
