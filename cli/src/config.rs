use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

/// Named difficulty tiers and the hazard density, in percent, each of them stands for.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DifficultyTable {
    difficulties: BTreeMap<String, u8>,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        let difficulties = [("easy", 10), ("medium", 20), ("hard", 30)]
            .into_iter()
            .map(|(name, density_pct)| (name.to_owned(), density_pct))
            .collect();
        Self { difficulties }
    }
}

impl DifficultyTable {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read difficulty table {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("invalid difficulty table {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: Self = toml::from_str(text)?;
        if raw.difficulties.is_empty() {
            bail!("no difficulties defined");
        }

        let mut difficulties = BTreeMap::new();
        for (name, density_pct) in raw.difficulties {
            if density_pct > 100 {
                bail!("difficulty `{name}` has density {density_pct}%, must be within 0..=100");
            }
            if difficulties.insert(name.to_lowercase(), density_pct).is_some() {
                bail!("difficulty `{name}` defined more than once");
            }
        }
        Ok(Self { difficulties })
    }

    /// Case-insensitive lookup.
    pub fn density_pct(&self, name: &str) -> Result<u8> {
        self.difficulties
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| {
                anyhow!(
                    "unknown difficulty `{name}`, expected one of: {}",
                    self.names().collect::<Vec<_>>().join(", ")
                )
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.difficulties.keys().map(String::as_str)
    }
}
