//! Disposable MongoDB server for integration tests.

use mongodb::{Client, Database, bson::doc};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

/// A MongoDB container plus a connected client.
///
/// The container is stopped and removed when the value is dropped, so keep
/// it alive for as long as the test uses its databases.
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("catalog_test");
/// # }
/// ```
pub struct TestMongo {
    _container: ContainerAsync<Mongo>,
    client: Client,
}

impl TestMongo {
    /// Starts the container and waits until the server answers a ping.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let client = Client::with_uri_str(format!("mongodb://127.0.0.1:{}", port))
            .await
            .expect("Failed to create MongoDB client");
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .expect("MongoDB did not answer ping");

        tracing::info!(port, "Test MongoDB ready");
        Self {
            _container: container,
            client,
        }
    }

    /// Handle to a database on the test server
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }
}
