use sea_orm::DatabaseConnection;
use tracing::info;

use crate::employee::repository::{EmployeeRepository, SeaOrmEmployeeRepository};
use crate::errors::ServiceError;

/// Fixed roster inserted at startup, in this order.
pub const SEED_EMPLOYEES: [(&str, &str); 11] = [
    ("Frodo Baggins", "ring bearer"),
    ("Bilbo Baggins", "burglar"),
    ("Gandalf the White", "wizard"),
    ("Samwise Baggins", "gardener"),
    ("Meriadoc Brandybuck", "esquire of Rohan"),
    ("Peregrin Took", "guard of the citadel"),
    ("Pippin Took", "apprentice cook"),
    ("Merry Brandybuck", "pony handler"),
    ("Tom Bombadil", "groundskeeper"),
    ("Pippy Longstocking", "intern"),
    ("Jim Bombardier", "contractor"),
];

/// Insert the roster once, through the save path. A non-empty store is left
/// untouched so a restart against a file-backed database keeps exactly one
/// copy. Returns the number of rows inserted.
pub async fn seed_employees(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    let repo = SeaOrmEmployeeRepository::new(db.clone());
    if !repo.find_all().await?.is_empty() {
        info!("employee store already populated; skipping seed");
        return Ok(0);
    }
    for (name, title) in SEED_EMPLOYEES {
        repo.save(name, title).await?;
    }
    info!(count = SEED_EMPLOYEES.len(), "seeded employee roster");
    Ok(SEED_EMPLOYEES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    async fn migrated_db() -> DatabaseConnection {
        let db = models::db::connect_to("sqlite::memory:").await.expect("connect");
        migration::Migrator::up(&db, None).await.expect("migrate");
        db
    }

    #[tokio::test]
    async fn seed_inserts_roster_in_order() {
        let db = migrated_db().await;

        let inserted = seed_employees(&db).await.expect("seed");
        assert_eq!(inserted, 11);

        let repo = SeaOrmEmployeeRepository::new(db);
        let all = repo.find_all().await.expect("find_all");
        assert_eq!(all.len(), 11);
        for (row, (name, title)) in all.iter().zip(SEED_EMPLOYEES) {
            assert_eq!(row.name, name);
            assert_eq!(row.title, title);
        }
        // ids are unique, positive, and ascending
        assert!(all.windows(2).all(|w| 0 < w[0].id && w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let db = migrated_db().await;

        assert_eq!(seed_employees(&db).await.expect("first seed"), 11);
        assert_eq!(seed_employees(&db).await.expect("second seed"), 0);

        let repo = SeaOrmEmployeeRepository::new(db);
        assert_eq!(repo.find_all().await.expect("find_all").len(), 11);
    }
}
