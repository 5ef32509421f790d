use serde::{Deserialize, Serialize};

use barmaster_core::{DomainError, DomainResult, ShiftId};

pub const DEFAULT_SHIFT_START: &str = "18:00";
pub const DEFAULT_SHIFT_END: &str = "02:00";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Bartender,
    Barback,
    #[serde(rename = "Chefe de Bar", alias = "HeadBartender")]
    HeadBartender,
    #[serde(rename = "Garçon", alias = "Waiter")]
    Waiter,
}

/// One person on an event's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffShift {
    pub id: ShiftId,
    pub name: String,
    pub role: StaffRole,
    /// `HH:mm`
    pub start_time: String,
    /// `HH:mm`, may be past midnight.
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

/// Roster form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDraft {
    #[serde(default)]
    pub id: Option<ShiftId>,
    pub name: String,
    #[serde(default)]
    pub role: Option<StaffRole>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

impl ShiftDraft {
    pub fn into_shift(self) -> DomainResult<StaffShift> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("staff name cannot be empty"));
        }
        let role = self
            .role
            .ok_or_else(|| DomainError::validation("staff role is required"))?;

        Ok(StaffShift {
            id: self.id.unwrap_or_default(),
            name: self.name,
            role,
            start_time: non_blank_or(self.start_time, DEFAULT_SHIFT_START),
            end_time: non_blank_or(self.end_time, DEFAULT_SHIFT_END),
            hourly_rate: Some(self.hourly_rate.unwrap_or(0.0)),
        })
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}
