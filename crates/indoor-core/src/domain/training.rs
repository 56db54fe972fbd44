//! Training Plan and Assignment Entities
//!
//! A plan is a subscription-like program (duration, sessions/week, price).
//! An assignment ties a client to a plan and tracks attendance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

/// Every plan runs for a fixed 35 days
pub const PLAN_DURATION_DAYS: u32 = 35;

fn default_duration() -> u32 {
    PLAN_DURATION_DAYS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    #[serde(alias = "principiante")]
    Beginner,
    #[serde(alias = "intermedio")]
    Intermediate,
    #[serde(alias = "avanzado")]
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Principiante",
            Difficulty::Intermediate => "Intermedio",
            Difficulty::Advanced => "Avanzado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    #[serde(alias = "activo")]
    Active,
    #[serde(alias = "congelado")]
    Frozen,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Frozen => "frozen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Length of the plan in days
    #[serde(rename = "duration", default = "default_duration")]
    pub duration_days: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, alias = "active_users")]
    pub active_users: u32,
    #[serde(default)]
    pub status: PlanStatus,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "sessions_per_week")]
    pub sessions_per_week: u8,
}

impl TrainingPlan {
    pub fn total_sessions(&self) -> u32 {
        // Whole weeks only; a 35-day plan at 3/week is 15 sessions
        (self.duration_days / 7) * u32::from(self.sessions_per_week)
    }
}

impl_entity!(TrainingPlan);

/// Lifecycle of a client's enrolment in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AssignmentStatus {
    #[default]
    #[serde(rename = "activo", alias = "active")]
    Active,
    #[serde(rename = "congelado", alias = "frozen")]
    Frozen,
    #[serde(rename = "completado", alias = "completed")]
    Completed,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "activo",
            AssignmentStatus::Frozen => "congelado",
            AssignmentStatus::Completed => "completado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(with = "super::dates")]
    pub date: NaiveDate,
    pub attended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAssignment {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub client_name: String,
    pub plan_name: String,
    #[serde(with = "super::dates")]
    pub start_date: NaiveDate,
    #[serde(with = "super::dates")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default)]
    pub attendance: Vec<Attendance>,
}

impl TrainingAssignment {
    /// Completed sessions as a percentage of the total, 0..=100
    pub fn progress(&self) -> u32 {
        if self.total_sessions == 0 {
            return 0;
        }
        let done = u64::from(self.completed_sessions.min(self.total_sessions));
        u32::try_from(done * 100 / u64::from(self.total_sessions)).unwrap_or(100)
    }

    /// Days until the end date; zero once it has passed
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days().max(0)
    }

    /// Record a session on `date`. A second mark for the same day is ignored.
    pub fn mark_attendance(&mut self, date: NaiveDate) -> bool {
        if self.attendance.iter().any(|a| a.date == date && a.attended) {
            return false;
        }
        match self.attendance.iter_mut().find(|a| a.date == date) {
            Some(entry) => entry.attended = true,
            None => self.attendance.push(Attendance { date, attended: true }),
        }
        if self.total_sessions == 0 || self.completed_sessions < self.total_sessions {
            self.completed_sessions += 1;
        }
        if self.total_sessions > 0 && self.completed_sessions >= self.total_sessions {
            self.status = AssignmentStatus::Completed;
        }
        true
    }

    /// Toggle between active and frozen; completed assignments stay completed
    pub fn toggle_freeze(&mut self) {
        self.status = match self.status {
            AssignmentStatus::Active => AssignmentStatus::Frozen,
            AssignmentStatus::Frozen => AssignmentStatus::Active,
            AssignmentStatus::Completed => AssignmentStatus::Completed,
        };
    }
}

impl_entity!(TrainingAssignment);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assignment() -> TrainingAssignment {
        TrainingAssignment {
            id: "1".into(),
            client_name: "John Doe".into(),
            plan_name: "Resistencia para Principiantes".into(),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 3, 7),
            status: AssignmentStatus::Active,
            total_sessions: 15,
            completed_sessions: 7,
            attendance: vec![],
        }
    }

    #[test]
    fn test_plan_defaults_duration() {
        let plan: TrainingPlan = serde_json::from_str(
            r#"{"id":"1","name":"HIIT Avanzado","difficulty":"advanced","price":149.99,"sessionsPerWeek":5}"#,
        )
        .unwrap();
        assert_eq!(plan.duration_days, PLAN_DURATION_DAYS);
        assert_eq!(plan.difficulty, Difficulty::Advanced);
        assert_eq!(plan.total_sessions(), 25);
    }

    #[test]
    fn test_progress_and_days_left() {
        let a = assignment();
        assert_eq!(a.progress(), 46);
        assert_eq!(a.days_left(date(2024, 2, 21)), 15);
        assert_eq!(a.days_left(date(2024, 4, 1)), 0);
    }

    #[test]
    fn test_progress_with_large_session_counts() {
        let mut a = assignment();
        a.total_sessions = u32::MAX;
        a.completed_sessions = u32::MAX / 2 + 1;
        assert_eq!(a.progress(), 50);
        a.completed_sessions = u32::MAX;
        assert_eq!(a.progress(), 100);
    }

    #[test]
    fn test_mark_attendance_once_per_day() {
        let mut a = assignment();
        assert!(a.mark_attendance(date(2024, 2, 9)));
        assert!(!a.mark_attendance(date(2024, 2, 9)));
        assert_eq!(a.completed_sessions, 8);
        assert_eq!(a.attendance.len(), 1);
    }

    #[test]
    fn test_last_session_completes_assignment() {
        let mut a = assignment();
        a.completed_sessions = 14;
        a.mark_attendance(date(2024, 3, 6));
        assert_eq!(a.status, AssignmentStatus::Completed);
        a.toggle_freeze();
        assert_eq!(a.status, AssignmentStatus::Completed);
    }

    #[test]
    fn test_status_spanish_wire_names() {
        let json = serde_json::to_value(AssignmentStatus::Frozen).unwrap();
        assert_eq!(json, "congelado");
        let parsed: AssignmentStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, AssignmentStatus::Active);
    }
}
