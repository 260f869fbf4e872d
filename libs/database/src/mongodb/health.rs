use mongodb::{Client, bson::doc};

/// Pings the server; `Err` carries the driver's message.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> =
///     vec![("mongodb", Box::pin(check_health(&client)))];
/// ```
pub async fn check_health(client: &Client) -> Result<(), String> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
