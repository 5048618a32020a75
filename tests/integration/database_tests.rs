//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use cmdtools_rs::ResourceTable;
    use cmdtools_rs::storage::ResourceStore;
    use cmdtools_rs::storage::database::{Database, DatabaseBackendType};
    use serde_json::json;

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);
        assert_ok!(db.health_check().await);
    }

    /// Migrations create the tables once and are safe to repeat
    #[tokio::test]
    async fn test_database_migration_is_idempotent() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_ok!(db.migrate().await);
        assert_ok!(db.migrate().await);

        for table in ResourceTable::ALL {
            let items = assert_ok!(db.list(table).await);
            assert!(items.is_empty(), "{} should start empty", table);
        }
    }

    #[tokio::test]
    async fn test_rows_come_back_in_sequence_order() {
        let test_db = TestDatabase::seeded().await;

        let programs = assert_ok!(test_db.db().list(ResourceTable::WinPrograms).await);
        let seq: Vec<_> = programs.iter().filter_map(|item| item.seq_no()).collect();
        assert_eq!(seq, vec![1, 2, 3, 4, 5]);

        let commands = assert_ok!(test_db.db().list(ResourceTable::CmdTools).await);
        assert_eq!(commands[0].field("cmd"), Some(&json!("git log --oneline")));
    }

    #[tokio::test]
    async fn test_null_columns_are_blank_strings() {
        let test_db = TestDatabase::seeded().await;

        let commands = assert_ok!(test_db.db().list(ResourceTable::CmdTools).await);
        let docker = commands.iter().find(|item| item.seq_no() == Some(2)).unwrap();
        assert_eq!(docker.field("remark2"), Some(&json!("")));
        assert_eq!(docker.field("Type"), Some(&json!("docker")));

        let prompts = assert_ok!(test_db.db().list(ResourceTable::PromptTools).await);
        assert_eq!(prompts[1].field("Classification"), Some(&json!("")));
        assert_eq!(prompts[1].field("Prompt_Eng"), Some(&json!("Review this code")));
    }

    #[tokio::test]
    async fn test_website_columns_keep_store_names() {
        let test_db = TestDatabase::seeded().await;

        let sites = assert_ok!(test_db.db().list(ResourceTable::Websites).await);
        let github = &sites[0];
        for key in [
            "iSeqNo",
            "Remark",
            "Classification",
            "Website",
            "account",
            "account_webid",
            "password",
            "password_webid",
        ] {
            assert!(github.field(key).is_some(), "missing {}", key);
        }
    }
}
