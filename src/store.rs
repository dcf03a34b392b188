//! Quote store loading
//!
//! One load attempt per session, from a local JSON file or a remote
//! URL. Any failure is recovered locally: the built-in database is
//! substituted and a non-fatal notice is handed to the caller. Loading
//! never aborts the session.

use crate::config::Config;
use crate::core::data::QuoteDatabase;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the session's database actually came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    File(PathBuf),
    Remote(String),
    Fallback,
}

impl std::fmt::Display for LoadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadSource::File(path) => write!(f, "{}", path.display()),
            LoadSource::Remote(url) => write!(f, "{}", url),
            LoadSource::Fallback => write!(f, "built-in quotes"),
        }
    }
}

/// Result of the session's single load attempt. Always carries a
/// usable database; `notice` is set when the fallback was substituted.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub db: QuoteDatabase,
    pub source: LoadSource,
    pub notice: Option<String>,
}

/// A place quotes can be fetched from
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn location(&self) -> LoadSource;
    async fn fetch(&self) -> AppResult<QuoteDatabase>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl QuoteSource for FileSource {
    fn location(&self) -> LoadSource {
        LoadSource::File(self.path.clone())
    }

    async fn fetch(&self) -> AppResult<QuoteDatabase> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Io(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse quotes file: {}", e)))
    }
}

pub struct RemoteSource {
    url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuoteSource for RemoteSource {
    fn location(&self) -> LoadSource {
        LoadSource::Remote(self.url.clone())
    }

    async fn fetch(&self) -> AppResult<QuoteDatabase> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Network(e.to_string()))?;

        response
            .json::<QuoteDatabase>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse quotes response: {}", e)))
    }
}

/// Owns the configured resource location and performs the session's
/// single load attempt.
pub struct QuoteStore {
    config: Config,
}

impl QuoteStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn source(&self) -> Box<dyn QuoteSource> {
        match &self.config.general.quotes_url {
            Some(url) => Box::new(RemoteSource::new(url.clone())),
            None => Box::new(FileSource::new(self.config.general.quotes_file.clone())),
        }
    }

    /// Load the quote database. Exactly one attempt, no retry; on
    /// failure the built-in fallback is returned together with an
    /// informational notice.
    pub async fn load(&self) -> LoadOutcome {
        let source = self.source();
        match source.fetch().await {
            Ok(db) => LoadOutcome {
                db,
                source: source.location(),
                notice: None,
            },
            Err(err) => LoadOutcome {
                db: QuoteDatabase::builtin(),
                source: LoadSource::Fallback,
                notice: Some(format!(
                    "Using built-in quotes ({} could not be loaded: {})",
                    source.location(),
                    err
                )),
            },
        }
    }

    /// Seed the configured quotes file with the built-in database so
    /// users have something to edit. Refuses to overwrite an existing
    /// file unless `force` is set.
    pub fn init(&self, force: bool) -> AppResult<PathBuf> {
        let path = &self.config.general.quotes_file;

        if path.exists() && !force {
            return Err(AppError::System(format!(
                "Quotes file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&QuoteDatabase::builtin())
            .map_err(|e| AppError::System(format!("Failed to serialize quotes: {}", e)))?;

        std::fs::write(path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(path: PathBuf) -> Config {
        let mut config = Config::default();
        config.general.quotes_file = path;
        config.general.quotes_url = None;
        config
    }

    #[tokio::test]
    async fn load_reads_quotes_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"courage": ["Be brave - Someone", "Fear less"]}}"#
        )
        .unwrap();

        let store = QuoteStore::new(config_for(file.path().to_path_buf()));
        let outcome = store.load().await;

        assert!(outcome.notice.is_none());
        assert_eq!(outcome.source, LoadSource::File(file.path().to_path_buf()));
        assert_eq!(outcome.db.get("courage").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn load_is_idempotent_for_same_resource() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"calm": ["Breathe - Anon"]}}"#).unwrap();

        let store = QuoteStore::new(config_for(file.path().to_path_buf()));
        let first = store.load().await;
        let second = store.load().await;

        assert_eq!(first.db, second.db);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_builtin_with_notice() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuoteStore::new(config_for(dir.path().join("nope.json")));
        let outcome = store.load().await;

        assert_eq!(outcome.source, LoadSource::Fallback);
        assert!(outcome.notice.is_some());
        assert_eq!(outcome.db, QuoteDatabase::builtin());
    }

    #[tokio::test]
    async fn unparsable_file_falls_back_to_builtin_with_notice() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let store = QuoteStore::new(config_for(file.path().to_path_buf()));
        let outcome = store.load().await;

        assert_eq!(outcome.source, LoadSource::Fallback);
        assert!(outcome.notice.is_some());
        assert!(outcome.db.len() >= 4);
    }

    #[test]
    fn init_writes_builtin_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let store = QuoteStore::new(config_for(path.clone()));

        let written = store.init(false).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let db: QuoteDatabase = serde_json::from_str(&content).unwrap();
        assert_eq!(db, QuoteDatabase::builtin());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let store = QuoteStore::new(config_for(file.path().to_path_buf()));
        assert!(store.init(false).is_err());
        assert!(store.init(true).is_ok());
    }
}
