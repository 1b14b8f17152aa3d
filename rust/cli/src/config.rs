use riffle_engine::cards::{rank_set, suit_set};
use riffle_engine::deck::DeckOptions;
use riffle_engine::plan::ShufflePlan;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub copies: u32,
    pub ranks: String,
    pub suits: String,
    pub plan: Vec<String>,
    pub random_cards: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub copies: ValueSource,
    pub ranks: ValueSource,
    pub suits: ValueSource,
    pub plan: ValueSource,
    pub random_cards: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            copies: ValueSource::Default,
            ranks: ValueSource::Default,
            suits: ValueSource::Default,
            plan: ValueSource::Default,
            random_cards: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            copies: 1,
            ranks: "french".into(),
            suits: "french".into(),
            plan: vec!["riffle".into()],
            random_cards: 0,
        }
    }
}

impl Config {
    /// Deck construction options described by this config.
    pub fn deck_options(&self) -> Result<DeckOptions, ConfigError> {
        let ranks = rank_set(&self.ranks)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown rank set '{}'", self.ranks)))?;
        let suits = suit_set(&self.suits)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown suit set '{}'", self.suits)))?;
        Ok(DeckOptions {
            copies: self.copies,
            ranks: ranks.to_vec(),
            suits: suits.to_vec(),
            ..DeckOptions::default()
        })
    }

    pub fn shuffle_plan(&self) -> Result<ShufflePlan, ConfigError> {
        ShufflePlan::parse(&self.plan).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Merged file and env values, not yet validated. Callers apply their own
/// overrides and then call [`validate`].
pub fn load() -> Result<Config, ConfigError> {
    resolve().map(|resolved| resolved.config)
}

/// Merged and validated config together with where each value came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = resolve()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

fn resolve() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("RIFFLE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.copies {
            cfg.copies = v;
            sources.copies = ValueSource::File;
        }
        if let Some(v) = f.ranks {
            cfg.ranks = v;
            sources.ranks = ValueSource::File;
        }
        if let Some(v) = f.suits {
            cfg.suits = v;
            sources.suits = ValueSource::File;
        }
        if let Some(v) = f.plan {
            cfg.plan = v;
            sources.plan = ValueSource::File;
        }
        if let Some(v) = f.random_cards {
            cfg.random_cards = v;
            sources.random_cards = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("RIFFLE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(copies) = std::env::var("RIFFLE_COPIES")
        && !copies.is_empty()
    {
        cfg.copies = copies
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid copies".into()))?;
        sources.copies = ValueSource::Env;
    }
    if let Ok(ranks) = std::env::var("RIFFLE_RANKS")
        && !ranks.is_empty()
    {
        cfg.ranks = ranks;
        sources.ranks = ValueSource::Env;
    }
    if let Ok(suits) = std::env::var("RIFFLE_SUITS")
        && !suits.is_empty()
    {
        cfg.suits = suits;
        sources.suits = ValueSource::Env;
    }
    if let Ok(plan) = std::env::var("RIFFLE_PLAN")
        && !plan.is_empty()
    {
        cfg.plan = split_plan(&plan);
        sources.plan = ValueSource::Env;
    }
    if let Ok(n) = std::env::var("RIFFLE_RANDOM_CARDS")
        && !n.is_empty()
    {
        cfg.random_cards = n
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid random_cards".into()))?;
        sources.random_cards = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    copies: Option<u32>,
    #[serde(default)]
    ranks: Option<String>,
    #[serde(default)]
    suits: Option<String>,
    #[serde(default)]
    plan: Option<Vec<String>>,
    #[serde(default)]
    random_cards: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.copies == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: copies must be >=1".into(),
        ));
    }
    cfg.deck_options()?;
    cfg.shuffle_plan()?;
    Ok(())
}

/// Splits a comma-separated plan such as `pharo,riffle:6`.
pub fn split_plan(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
