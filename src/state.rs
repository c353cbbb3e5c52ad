use sea_orm::DatabaseConnection;

/// Shared router state. The connection is a pool handle: every query checks a
/// connection out and returns it when the statement completes.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}
