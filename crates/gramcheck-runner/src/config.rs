use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use gramcheck_error::{Error, Result};

use crate::runner::RunnerConfig;

/// Contents of a `gramcheck.toml` file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Grammars to check; empty means every registered grammar.
    #[serde(default)]
    pub grammars: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    pub grammar: String,
    pub name: String,
    pub source: String,
}

impl CheckConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("config::from_path")
                .with_context("path", path.display().to_string())
        })?;
        text.parse::<CheckConfig>()
            .map_err(|err| err.with_context("path", path.display().to_string()))
    }

    pub fn into_runner_config(self) -> RunnerConfig {
        let mut config = RunnerConfig::default()
            .with_grammars(self.grammars)
            .with_parallel(self.parallel);
        for query in self.queries {
            config = config.with_query(query.grammar, query.name, query.source);
        }
        config
    }
}

impl FromStr for CheckConfig {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let config: CheckConfig = toml::from_str(text).map_err(|err| {
            Error::config_invalid(format!("invalid TOML: {}", err.message()))
                .with_operation("config::parse")
                .set_source(err)
        })?;

        for query in &config.queries {
            if query.name.trim().is_empty() {
                return Err(Error::config_invalid("query name must not be empty")
                    .with_operation("config::parse")
                    .with_context("grammar", query.grammar.clone()));
            }
        }

        Ok(config)
    }
}
