// file: src/database/repository.rs
// description: surname prefix search over a relational table
// reference: https://docs.rs/sqlx

use crate::config::DatabaseConfig;
use crate::database::client;
use crate::error::Result;
use crate::models::SearchOutcome;
use crate::utils::{OperationTimer, Validator};
use futures::TryStreamExt;
use sqlx::AnyPool;
use std::time::Duration;
use tracing::{debug, info};

/// Escape character for LIKE patterns. Backslash is not portable: MySQL
/// treats it as a string-literal escape, SQLite does not.
const LIKE_ESCAPE: char = '!';

const SLOW_QUERY: Duration = Duration::from_secs(2);

/// Owns the database pool and runs prefix searches against one column.
pub struct SurnameRepository {
    pool: AnyPool,
    table: String,
    column: String,
}

impl SurnameRepository {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = client::connect(config).await?;
        Self::from_pool(pool, &config.table, &config.column)
    }

    pub fn from_pool(pool: AnyPool, table: &str, column: &str) -> Result<Self> {
        Validator::validate_identifier(table)?;
        Validator::validate_identifier(column)?;

        Ok(Self {
            pool,
            table: table.to_string(),
            column: column.to_string(),
        })
    }

    pub async fn ping(&self) -> Result<()> {
        client::ping(&self.pool).await
    }

    /// All stored surnames starting with `prefix`, ascending.
    ///
    /// An empty prefix matches every row. Case sensitivity follows the
    /// column collation.
    pub async fn search(&self, prefix: &str) -> Result<SearchOutcome> {
        let timer = OperationTimer::new("surname search");
        let sql = format!(
            "SELECT {col} FROM {table} WHERE {col} LIKE ? ESCAPE '{esc}' ORDER BY {col}",
            col = self.column,
            table = self.table,
            esc = LIKE_ESCAPE,
        );
        let pattern = like_prefix_pattern(prefix);
        debug!("Running prefix query with pattern {:?}", pattern);

        let mut rows = sqlx::query_scalar::<_, String>(&sql)
            .bind(pattern)
            .fetch(&self.pool);

        let mut surnames = Vec::new();
        while let Some(surname) = rows.try_next().await? {
            surnames.push(surname);
        }

        timer.warn_if_slow(SLOW_QUERY);
        timer.finish_with_count(surnames.len());
        info!("Prefix {:?} matched {} surnames", prefix, surnames.len());

        Ok(SearchOutcome::from_rows(surnames))
    }

    pub async fn count_matches(&self, prefix: &str) -> Result<u64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {table} WHERE {col} LIKE ? ESCAPE '{esc}'",
            col = self.column,
            table = self.table,
            esc = LIKE_ESCAPE,
        );

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(like_prefix_pattern(prefix))
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Literal-prefix LIKE pattern: wildcards in `prefix` are escaped.
pub fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if ch == LIKE_ESCAPE || ch == '%' || ch == '_' {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}


#[cfg(test)]
mod tests {
    use super::test_support::{X_FILES, seeded_repository};
    use super::*;
    use crate::error::SearchError;
    use crate::models::MatchSet;
    use pretty_assertions::assert_eq;

    fn matches(outcome: SearchOutcome) -> Vec<String> {
        match outcome {
            SearchOutcome::Matches(set) => set.into_vec(),
            SearchOutcome::NoMatches => Vec::new(),
        }
    }

    #[test]
    fn test_like_prefix_pattern() {
        assert_eq!(like_prefix_pattern("Sc"), "Sc%");
        assert_eq!(like_prefix_pattern(""), "%");
        assert_eq!(like_prefix_pattern("50%_off!"), "50!%!_off!!%");
    }

    #[tokio::test]
    async fn test_prefix_search_scenario() {
        let (_temp, repo) = seeded_repository(&X_FILES).await;

        let outcome = repo.search("Sc").await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Matches(MatchSet::new(vec![
                "Scull".to_string(),
                "Scully".to_string()
            ]))
        );
    }

    #[tokio::test]
    async fn test_results_sorted_and_prefixed() {
        let (_temp, repo) = seeded_repository(&X_FILES).await;

        for prefix in ["S", "Sk", "Skin", "M"] {
            let found = matches(repo.search(prefix).await.unwrap());
            assert!(!found.is_empty());
            assert!(found.iter().all(|s| s.starts_with(prefix)));

            let mut sorted = found.clone();
            sorted.sort();
            assert_eq!(found, sorted);
        }
    }

    #[tokio::test]
    async fn test_empty_prefix_returns_everything() {
        let (_temp, repo) = seeded_repository(&X_FILES).await;

        let found = matches(repo.search("").await.unwrap());
        assert_eq!(found, vec!["Mulder", "Scull", "Scully", "Skin", "Skinner"]);
        assert_eq!(repo.count_matches("").await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_unmatched_prefix_is_no_matches() {
        let (_temp, repo) = seeded_repository(&X_FILES).await;

        assert_eq!(repo.search("Zz").await.unwrap(), SearchOutcome::NoMatches);
        assert_eq!(repo.count_matches("Zz").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicates_are_preserved() {
        let (_temp, repo) = seeded_repository(&["Skinner", "Skin", "Skinner"]).await;

        let found = matches(repo.search("Ski").await.unwrap());
        assert_eq!(found, vec!["Skin", "Skinner", "Skinner"]);
    }

    #[tokio::test]
    async fn test_wildcards_match_literally() {
        let (_temp, repo) = seeded_repository(&["S_ully", "Scully", "100%", "1000"]).await;

        assert_eq!(matches(repo.search("S_").await.unwrap()), vec!["S_ully"]);
        assert_eq!(matches(repo.search("100%").await.unwrap()), vec!["100%"]);
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() {
        let (_temp, repo) = seeded_repository(&X_FILES).await;
        let pool = repo.pool.clone();
        let broken = SurnameRepository::from_pool(pool, "missing", "last_name").unwrap();

        assert!(matches!(
            broken.search("Sc").await,
            Err(SearchError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_unsafe_identifiers() {
        let (_temp, repo) = seeded_repository(&[]).await;
        let pool = repo.pool.clone();

        assert!(SurnameRepository::from_pool(pool, "name", "last_name; --").is_err());
    }
}
