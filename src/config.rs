use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::{Cli, StorageKind};
use crate::course::{
    Course, DEFAULT_CLOSEST_TO_PIN_HOLES, DEFAULT_HANDICAPS, DEFAULT_PARS, DEFAULT_POT,
    DEFAULT_STORAGE_KEY, TeamPairing, default_roster,
};
use crate::storage::{JsonFileStorage, SqliteStorage, Storage};
use crate::view::DEFAULT_INDEX_TITLE;

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub title: Option<String>,
    pub pars: Option<Vec<i32>>,
    pub handicaps: Option<Vec<u8>>,
    pub pot: Option<f64>,
    pub closest_to_pin_holes: Option<Vec<u8>>,
    pub teams: Option<Vec<TeamPairing>>,
    pub store: Option<PathBuf>,
    pub storage: Option<StorageKind>,
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub course: Course,
    pub store: PathBuf,
    pub storage: StorageKind,
    pub storage_key: String,
}

/// # Errors
/// Returns an error if the TOML does not parse.
pub fn parse_file_config(contents: &str) -> Result<FileConfig> {
    toml::from_str::<FileConfig>(contents).context("parse config toml")
}

/// Merge CLI flags over the optional TOML file over the built-in course.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or the
/// resulting course fails validation.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };
    resolve_config(cli.store.clone(), cli.storage, file_config)
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config toml {}", path.display()))?;
    parse_file_config(&contents).with_context(|| format!("in {}", path.display()))
}

/// # Errors
/// Returns an error if the course fails validation.
pub fn resolve_config(
    store: Option<PathBuf>,
    storage: Option<StorageKind>,
    file_config: FileConfig,
) -> Result<AppConfig> {
    let pars = file_config.pars.unwrap_or_else(|| DEFAULT_PARS.to_vec());
    let handicaps = file_config
        .handicaps
        .unwrap_or_else(|| DEFAULT_HANDICAPS.to_vec());
    let ctp_holes = file_config
        .closest_to_pin_holes
        .unwrap_or_else(|| DEFAULT_CLOSEST_TO_PIN_HOLES.to_vec());
    let course = Course::new(
        &pars,
        &handicaps,
        file_config.pot.unwrap_or(DEFAULT_POT),
        file_config.teams.unwrap_or_else(default_roster),
        &ctp_holes,
    )
    .context("invalid course configuration")?;

    let storage = storage.or(file_config.storage).unwrap_or(StorageKind::Json);
    let store = store.or(file_config.store).unwrap_or_else(|| {
        PathBuf::from(match storage {
            StorageKind::Json => "golf_outing_scores.json",
            StorageKind::Sqlite => "golf_outing.sqlite3",
        })
    });

    Ok(AppConfig {
        title: file_config
            .title
            .unwrap_or_else(|| DEFAULT_INDEX_TITLE.to_string()),
        course,
        store,
        storage,
        storage_key: file_config
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
    })
}

/// # Errors
/// Returns an error if the SQLite database cannot be opened.
pub fn open_storage(config: &AppConfig) -> Result<Box<dyn Storage>> {
    Ok(match config.storage {
        StorageKind::Json => Box::new(JsonFileStorage::new(&config.store)),
        StorageKind::Sqlite => Box::new(
            SqliteStorage::open(&config.store, &config.storage_key)
                .with_context(|| format!("open sqlite store {}", config.store.display()))?,
        ),
    })
}
