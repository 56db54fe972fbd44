//! Repository Integration Tests
//!
//! Memory repository CRUD, data source dispatch and the requests the REST
//! repository builds for each operation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use reqwest::Method;

    use crate::config::{ApiConfig, DataSourceKind};
    use crate::domain::{Client, MaintenanceRecord, MembershipStatus, RecordId, Simulator, SimulatorStatus};
    use crate::error::ApiError;
    use crate::http::HttpClient;
    use crate::repository::{list_for_bike, DataSource, MemoryRepository, Repository, RestRepository};

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: RecordId::from(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
            membership_status: MembershipStatus::Active,
            bikes: 0,
        }
    }

    fn http() -> HttpClient {
        HttpClient::new(&ApiConfig::default().with_base_url("http://localhost:3000/api/"))
    }

    #[tokio::test]
    async fn test_create_assigns_next_numeric_id() {
        let repo = MemoryRepository::with_records(vec![client("1", "Ana"), client("7", "Luis")]);

        let created = repo.create(&client("", "Eva")).await.expect("Failed to create");
        assert_eq!(created.id.as_str(), "8");

        let temp = repo.create(&client("tmp-3", "Pablo")).await.expect("Failed to create");
        assert_eq!(temp.id.as_str(), "9");
        assert_eq!(repo.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = MemoryRepository::with_records(vec![client("1", "Ana")]);

        let found = repo.find_by_id(&RecordId::from("1")).await.expect("Find failed");
        assert_eq!(found.unwrap().name, "Ana");
        assert!(repo.find_by_id(&RecordId::from("2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = MemoryRepository::with_records(vec![client("1", "Ana")]);

        let mut ana = client("1", "Ana");
        ana.membership_status = MembershipStatus::Inactive;
        let updated = repo.update(&ana).await.expect("Update failed");
        assert!(!updated.is_active());

        repo.delete(&RecordId::from("1")).await.expect("Delete failed");
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_missing_records_are_not_found() {
        let repo: MemoryRepository<Client> = MemoryRepository::new();

        let update = repo.update(&client("5", "Nadie")).await;
        assert!(matches!(update, Err(ApiError::NotFound(_))));

        let delete = repo.delete(&RecordId::from("5")).await;
        assert!(matches!(delete, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_explicit_id_rejected() {
        let repo = MemoryRepository::with_records(vec![client("1", "Ana")]);
        let result = repo.create(&client("1", "Otra")).await;
        assert!(matches!(result, Err(ApiError::Status { status: 409, .. })));
    }

    #[tokio::test]
    async fn test_demo_data_source_uses_seed() {
        let config = ApiConfig::default().with_data_source(DataSourceKind::Demo);
        let source = DataSource::from_config(&config, &http(), || vec![client("1", "Ana")]);

        assert_eq!(source.kind(), DataSourceKind::Demo);
        assert_eq!(source.list().await.unwrap()[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_list_for_bike_newest_first() {
        let record = |id: &str, bike: &str, date: &str| MaintenanceRecord {
            id: RecordId::from(id),
            bike_id: RecordId::from(bike),
            service_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            details: format!("Servicio {id}"),
        };
        let repo = MemoryRepository::with_records(vec![
            record("1", "1", "2024-01-15"),
            record("2", "2", "2024-02-01"),
            record("3", "1", "2024-03-10"),
        ]);

        let history = list_for_bike(&repo, &RecordId::from("1")).await.unwrap();
        let ids: Vec<_> = history.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_rest_requests() {
        let repo: RestRepository<Client> = RestRepository::new(http());

        let list = repo.list_request();
        assert_eq!((list.method, list.url.as_str()), (Method::GET, "http://localhost:3000/api/clients"));

        let create = repo.create_request(&client("tmp-1", "Ana")).unwrap();
        assert_eq!(create.method, Method::POST);
        assert_eq!(create.url, "http://localhost:3000/api/clients");
        assert!(create.body.unwrap().get("id").is_none());

        let update = repo.update_request(&client("65f0a1", "Ana")).unwrap();
        assert_eq!((update.method, update.url.as_str()), (Method::PUT, "http://localhost:3000/api/clients/65f0a1"));

        let find = repo.find_request(&RecordId::from("42")).unwrap();
        assert_eq!((find.method, find.url.as_str()), (Method::GET, "http://localhost:3000/api/clients/42"));

        let delete = repo.delete_request(&RecordId::from("42")).unwrap();
        assert_eq!((delete.method, delete.url.as_str()), (Method::DELETE, "http://localhost:3000/api/clients/42"));
    }

    #[test]
    fn test_find_and_delete_need_saved_id() {
        let repo: RestRepository<Client> = RestRepository::new(http());

        for id in [RecordId::default(), RecordId::temporary(1)] {
            assert!(matches!(repo.find_request(&id), Err(ApiError::Internal(_))));
            assert!(matches!(repo.delete_request(&id), Err(ApiError::Internal(_))));
        }
    }

    #[test]
    fn test_create_without_returned_id_fails() {
        let draft = client("tmp-1", "Ana");

        let empty_body = RestRepository::created_record(&draft, None);
        assert!(matches!(empty_body, Err(ApiError::Internal(_))));

        let no_id = RestRepository::created_record(&draft, Some(serde_json::json!({ "name": "Ana", "email": "ana@example.com" })));
        assert!(matches!(no_id, Err(ApiError::Internal(_))));

        let saved = RestRepository::created_record(&draft, Some(serde_json::json!({ "id": 12, "name": "Ana", "email": "ana@example.com" })))
            .expect("Saved record");
        assert_eq!(saved.id.as_str(), "12");
    }

    #[test]
    fn test_update_request_needs_saved_id() {
        let repo: RestRepository<Simulator> = RestRepository::new(http());
        let draft = Simulator {
            id: RecordId::temporary(1),
            model: "Wahoo KICKR".into(),
            status: SimulatorStatus::Available,
            last_maintenance: None,
        };
        assert!(matches!(repo.update_request(&draft), Err(ApiError::Internal(_))));
    }
}
