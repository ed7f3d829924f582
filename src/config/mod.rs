use std::{
    collections::HashSet,
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::classify::DEFAULT_URGENCY_WINDOW_DAYS;
use crate::domain::CategoryBudget;
use crate::errors::LedgerError;

const HOME_ENV: &str = "BOOKKEEPING_CORE_HOME";
const APP_DIR_NAME: &str = "bookkeeping_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

const DEFAULT_BUDGETS: [(&str, i64); 8] = [
    ("Software", 500),
    ("Consultoria", 3000),
    ("Utilities", 400),
    ("Material", 200),
    ("Impostos", 5000),
    ("Marketing", 1000),
    ("Equipamentos", 2000),
    ("Outros", 500),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    /// Shown for firm-wide records and for records whose client is unknown.
    pub firm_label: String,
    /// Ordered; the budget table is rendered in this order.
    pub category_budgets: Vec<CategoryBudget>,
    pub urgency_window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "BRL".into(),
            firm_label: "Geral".into(),
            category_budgets: DEFAULT_BUDGETS
                .iter()
                .map(|(name, limit)| CategoryBudget::new(*name, Decimal::from(*limit)))
                .collect(),
            urgency_window_days: DEFAULT_URGENCY_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Rejects non-positive limits and repeated budget names.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut seen = HashSet::new();
        for budget in &self.category_budgets {
            if budget.limit <= Decimal::ZERO {
                return Err(LedgerError::InvalidConfig(format!(
                    "budget limit for `{}` must be positive, got {}",
                    budget.name, budget.limit
                )));
            }
            if !seen.insert(budget.name.as_str()) {
                return Err(LedgerError::InvalidConfig(format!(
                    "budget `{}` is configured more than once",
                    budget.name
                )));
            }
        }
        Ok(())
    }

    pub fn budget_for(&self, category: &str) -> Option<&CategoryBudget> {
        self.category_budgets
            .iter()
            .find(|budget| budget.name == category)
    }
}

/// Loads and saves [`Config`] as pretty JSON at a fixed path.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$BOOKKEEPING_CORE_HOME/config.json`, else the platform config directory.
    pub fn default_location() -> Result<Self, LedgerError> {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return Ok(Self::new(PathBuf::from(custom).join(CONFIG_FILE)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            LedgerError::InvalidConfig("no configuration directory on this platform".into())
        })?;
        Ok(Self::new(base.join(APP_DIR_NAME).join(CONFIG_FILE)))
    }

    /// Reads the config, or returns the defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            debug!(path = %self.path.display(), "no config file; using defaults");
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_carry_stock_budgets_in_order() {
        let config = Config::default();
        let names: Vec<&str> = config
            .category_budgets
            .iter()
            .map(|budget| budget.name.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"Software"));
        assert_eq!(names.last(), Some(&"Outros"));
        assert_eq!(config.budget_for("Impostos").map(|b| b.limit), Some(dec!(5000)));
        assert_eq!(config.urgency_window_days, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_limit_and_duplicates() {
        let mut config = Config::default();
        config.category_budgets.push(CategoryBudget::new("Viagens", Decimal::ZERO));
        assert!(matches!(config.validate(), Err(LedgerError::InvalidConfig(_))));

        let mut config = Config::default();
        config.category_budgets.push(CategoryBudget::new("Software", dec!(10)));
        assert!(matches!(config.validate(), Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
    }

    #[test]
    fn save_then_load_keeps_custom_budgets() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));
        let mut config = Config::default();
        config.firm_label = "Escritório".into();
        config.category_budgets = vec![CategoryBudget::new("Software", dec!(750.50))];
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
        assert!(!tmp_path(manager.path()).exists());
    }
}
