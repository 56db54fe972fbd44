//! Application Context
//!
//! One data source per entity, shared by every page via the Leptos Context API.

use indoor_core::domain::{
    Bike, Category, Client, Employee, InventoryItem, MaintenanceRecord, Sale, Service, Simulator,
    TrainingAssignment, TrainingPlan,
};
use indoor_core::http::HttpClient;
use indoor_core::repository::DataSource;
use indoor_core::{seed, ApiConfig};
use leptos::prelude::*;

#[derive(Clone)]
pub struct Backend {
    pub clients: DataSource<Client>,
    pub simulators: DataSource<Simulator>,
    pub training_plans: DataSource<TrainingPlan>,
    pub training_assignments: DataSource<TrainingAssignment>,
    pub services: DataSource<Service>,
    pub inventory: DataSource<InventoryItem>,
    pub categories: DataSource<Category>,
    pub bikes: DataSource<Bike>,
    pub employees: DataSource<Employee>,
    pub maintenance: DataSource<MaintenanceRecord>,
    pub sales: DataSource<Sale>,
}

impl Backend {
    pub fn new(config: &ApiConfig) -> Self {
        let http = HttpClient::new(config);
        Self {
            clients: DataSource::from_config(config, &http, seed::clients),
            simulators: DataSource::from_config(config, &http, seed::simulators),
            training_plans: DataSource::from_config(config, &http, seed::training_plans),
            training_assignments: DataSource::from_config(config, &http, seed::training_assignments),
            services: DataSource::from_config(config, &http, seed::services),
            inventory: DataSource::from_config(config, &http, seed::inventory),
            categories: DataSource::from_config(config, &http, seed::categories),
            bikes: DataSource::from_config(config, &http, seed::bikes),
            employees: DataSource::from_config(config, &http, seed::employees),
            maintenance: DataSource::from_config(config, &http, seed::maintenance),
            sales: DataSource::from_config(config, &http, seed::sales),
        }
    }
}

/// Get the backend from context
pub fn use_backend() -> Backend {
    expect_context::<Backend>()
}
