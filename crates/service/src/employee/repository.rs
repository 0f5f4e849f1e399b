use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::ServiceError;
use models::employee;

/// Read/write surface of the employee store. An explicit trait stands in
/// for framework-generated repository methods.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, in insertion order.
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError>;

    /// Employees whose name equals `name` exactly. Infallible at this
    /// boundary: a query execution fault is logged and reported as zero
    /// matches.
    async fn find_by_exact_name(&self, name: &str) -> Vec<employee::Model>;

    /// Store a new employee and return it with its id assigned.
    async fn save(&self, name: &str, title: &str) -> Result<employee::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        Ok(employee::find_all(&self.db).await?)
    }

    async fn find_by_exact_name(&self, name: &str) -> Vec<employee::Model> {
        match employee::find_by_name(&self.db, name).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "employee name search failed; reporting zero matches");
                Vec::new()
            }
        }
    }

    async fn save(&self, name: &str, title: &str) -> Result<employee::Model, ServiceError> {
        Ok(employee::create(&self.db, name, title).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    async fn migrated_repo() -> SeaOrmEmployeeRepository {
        let db = models::db::connect_to("sqlite::memory:").await.expect("connect");
        migration::Migrator::up(&db, None).await.expect("migrate");
        SeaOrmEmployeeRepository::new(db)
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = migrated_repo().await;

        let stored = repo.save("Gandalf the White", "wizard").await.expect("save");
        assert!(stored.id > 0);

        let all = repo.find_all().await.expect("find_all");
        assert_eq!(all, vec![stored.clone()]);
        assert_eq!(repo.find_by_exact_name("Gandalf the White").await, vec![stored]);
        assert!(repo.find_by_exact_name("Gandalf").await.is_empty());
    }

    #[tokio::test]
    async fn search_fault_reports_zero_matches() {
        // No migrations: the employee table is missing, so the query fails.
        let db = models::db::connect_to("sqlite::memory:").await.expect("connect");
        let repo = SeaOrmEmployeeRepository::new(db);

        assert!(repo.find_by_exact_name("Frodo Baggins").await.is_empty());
    }
}
