//! Routes
//!
//! One page per path. Unknown paths fall back to the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Simulators,
    Clients,
    Workshop,
    TrainingPlans,
    TrainingAssignments,
    Inventory,
    Pos,
    Employees,
    BikeHistory,
    Bikes,
}

impl Route {
    /// Sidebar order
    pub const MENU: [Route; 11] = [
        Route::Dashboard,
        Route::Simulators,
        Route::Clients,
        Route::Workshop,
        Route::TrainingPlans,
        Route::TrainingAssignments,
        Route::Inventory,
        Route::Pos,
        Route::Employees,
        Route::BikeHistory,
        Route::Bikes,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Simulators => "/simulators",
            Route::Clients => "/clients",
            Route::Workshop => "/workshop",
            Route::TrainingPlans => "/training",
            Route::TrainingAssignments => "/training-assignments",
            Route::Inventory => "/inventory",
            Route::Pos => "/pos",
            Route::Employees => "/employees",
            Route::BikeHistory => "/bike-history",
            Route::Bikes => "/bike-crud",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Simulators => "Simuladores",
            Route::Clients => "Clientes",
            Route::Workshop => "Taller",
            Route::TrainingPlans => "Planes de Entrenamiento",
            Route::TrainingAssignments => "Asignación de Entrenamientos",
            Route::Inventory => "Inventario",
            Route::Pos => "Almacén",
            Route::Employees => "Empleados",
            Route::BikeHistory => "Historial de Bicicletas",
            Route::Bikes => "CRUD de Bicicletas",
        }
    }

    /// Route for a location pathname; query and fragment are ignored
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::MENU
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::MENU {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Route::from_path("/clients/"), Route::Clients);
        assert_eq!(Route::from_path("/pos?tab=cart"), Route::Pos);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
        assert_eq!(Route::Bikes.label(), "CRUD de Bicicletas");
    }
}
