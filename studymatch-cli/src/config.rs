use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use studymatch_content::CourseSource;
use studymatch_core::{policy, MatchPolicy, DEFAULT_HISTORY_LIMIT};

use crate::state::ensure_studymatch_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content: ContentSection,
    pub history: HistorySection,
    pub matching: MatchingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// "bundled", a file path, or an http(s) URL.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingSection {
    pub min_token_len: usize,
    pub score_threshold: u32,
    pub exact_match_weight: u32,
    pub max_score_per_token: u32,
    /// Appended to the built-in stop-word list.
    pub extra_stop_words: Vec<String>,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            source: "bundled".to_string(),
        }
    }
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Default for MatchingSection {
    fn default() -> Self {
        Self {
            min_token_len: policy::DEFAULT_MIN_TOKEN_LEN,
            score_threshold: policy::DEFAULT_SCORE_THRESHOLD,
            exact_match_weight: policy::DEFAULT_EXACT_MATCH_WEIGHT,
            max_score_per_token: policy::DEFAULT_MAX_SCORE_PER_TOKEN,
            extra_stop_words: Vec::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.history.limit == 0 {
            bail!("[history] limit must be at least 1");
        }
        self.match_policy().validate()?;
        Ok(())
    }

    pub fn course_source(&self) -> CourseSource {
        let Ok(source) = self.content.source.parse::<CourseSource>();
        source
    }

    pub fn match_policy(&self) -> MatchPolicy {
        let m = &self.matching;
        MatchPolicy {
            min_token_len: m.min_token_len,
            score_threshold: m.score_threshold,
            exact_match_weight: m.exact_match_weight,
            max_score_per_token: m.max_score_per_token,
            ..MatchPolicy::default()
        }
        .with_extra_stop_words(&m.extra_stop_words)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_studymatch_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    read_config(&config_path()?)
}

pub fn read_config(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    cfg.validate().with_context(|| format!("invalid {}", p.display()))?;
    Ok(cfg)
}

pub fn save_config(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
