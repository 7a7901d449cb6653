use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Regulation length in minutes.
pub const REGULATION_MINUTES: u8 = 90;
/// Extra time length in minutes (two halves of 15).
pub const EXTRA_TIME_MINUTES: u8 = 30;

/// A goal scored during open play (regulation or extra time).
///
/// `minute` is the absolute match minute: 1..=90 regulation, 91..=120 extra
/// time. Minutes above 120 are reserved for shootout kicks, which the current
/// engine records in `PenaltyShootout` tallies instead of emitting events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalEvent {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub minute: u8,
}

impl GoalEvent {
    pub fn is_extra_time(&self) -> bool {
        self.minute > REGULATION_MINUTES && self.minute <= REGULATION_MINUTES + EXTRA_TIME_MINUTES
    }

    /// Human-readable time label used by the commentary formatter.
    ///
    /// Minutes above 120 render as shootout kicks. The committed engine never
    /// emits such events, but the label stays for forward compatibility with
    /// recording kicks as events.
    pub fn time_label(&self) -> String {
        let full_time = REGULATION_MINUTES + EXTRA_TIME_MINUTES;
        if self.minute > full_time {
            format!("Penalty {}", self.minute - full_time)
        } else if self.minute > REGULATION_MINUTES {
            format!("{}' Extra Time", self.minute - REGULATION_MINUTES)
        } else {
            format!("{}'", self.minute)
        }
    }
}
