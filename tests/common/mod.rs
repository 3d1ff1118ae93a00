use backend_service::config::Settings;
use backend_service::services::MongoDb;
use backend_service::startup::Application;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub db_slot: Arc<OnceCell<MongoDb>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut settings = Settings::default();
        settings.port = 0; // Random port for testing
        // Closed local port so tests never need a live MongoDB; the connection
        // attempt is fire-and-forget and must not affect serving.
        settings.mongodb.uri =
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&directConnection=true".to_string();

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db_slot = app.db_slot();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the root route
        let client = reqwest::Client::new();
        let root_url = format!("http://127.0.0.1:{}/", port);
        for _ in 0..50 {
            if client.get(&root_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, db_slot }
    }
}
