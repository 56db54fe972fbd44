//! Domain Layer
//!
//! Records mirrored from the REST API. One canonical struct per entity;
//! serde aliases absorb the casing differences between API versions.

mod entity;
mod client;
mod simulator;
mod training;
mod service;
mod inventory;
mod employee;
mod bike;
mod sale;
mod user;

pub mod dates;

pub use entity::{Entity, RecordId, TEMP_ID_PREFIX};
pub use client::{Client, MembershipStatus};
pub use simulator::{Simulator, SimulatorStatus};
pub use training::{
    Attendance, AssignmentStatus, Difficulty, PlanStatus, TrainingAssignment, TrainingPlan, PLAN_DURATION_DAYS,
};
pub use service::{Service, ServiceStatus};
pub use inventory::{Category, InventoryItem};
pub use employee::{Employee, EmployeeStatus};
pub use bike::{bikes_of, Bike, MaintenanceRecord};
pub use sale::{CartItem, Sale};
pub use user::{Role, User};
