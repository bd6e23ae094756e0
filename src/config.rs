//! App Configuration
//!
//! Loaded from the embedded `todo.config.json`; every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::TodoResult;

/// Sample entries shown on first load
pub const SAMPLE_TITLES: &[&str] = &[
    "Lorem ipsum dolor sit amet consectetur adipisicing elit.",
    "Lorem ipsum dolor sit amet consectetur, adipisicing elit. Atque culpa beatae commodi magni vero consequatur eligendi, accusamus excepturi corrupti voluptatem nihil asperiores iste deserunt inventore minima accusantium veritatis in quibusdam?",
    "Contrary to popular belief, Lorem Ipsum is not simply random text.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Titles seeded into the list at startup
    pub seed_titles: Vec<String>,
    /// Show the All/Active/Completed filter bar
    pub show_filters: bool,
    /// Console log level ("error", "warn", "info", "debug", "trace", "off")
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            seed_titles: SAMPLE_TITLES.iter().map(|s| s.to_string()).collect(),
            show_filters: true,
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> TodoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded config, or defaults if it fails to parse
    pub fn load() -> Self {
        match Self::from_json(include_str!("../todo.config.json")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Falling back to defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
