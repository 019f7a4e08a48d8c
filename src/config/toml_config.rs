use crate::domain::model::{Order, OrderJourney, StageSpec};
use crate::domain::ports::JourneyProvider;
use crate::utils::error::{DeliveryError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyConfig {
    pub journey: JourneyInfo,
    #[serde(default)]
    pub orders: Vec<OrderJourney>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyInfo {
    pub name: String,
    pub description: Option<String>,
}

impl JourneyConfig {
    /// 從 TOML 檔案載入旅程
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeliveryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析旅程，字串欄位在解析後才替換環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parse_error = |e: toml::de::Error| DeliveryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        };

        let table: toml::Table = content.parse().map_err(parse_error)?;
        let mut document = toml::Value::Table(table);

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeliveryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;
        Self::substitute_env_vars(&re, &mut document);

        document.try_into().map_err(parse_error)
    }

    /// 替換環境變數 (例如 ${DEPOT_NAME})，未設定的保持原樣
    fn substitute_env_vars(re: &Regex, value: &mut toml::Value) {
        match value {
            toml::Value::String(text) => {
                let replaced = re.replace_all(text, |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                });
                *text = replaced.into_owned();
            }
            toml::Value::Array(values) => {
                for item in values.iter_mut() {
                    Self::substitute_env_vars(re, item);
                }
            }
            toml::Value::Table(table) => {
                for (_, item) in table.iter_mut() {
                    Self::substitute_env_vars(re, item);
                }
            }
            _ => {}
        }
    }

    /// 內建示範旅程: 一組刀具從倉庫到送達
    pub fn demo() -> Self {
        Self {
            journey: JourneyInfo {
                name: "kitchen-knives".to_string(),
                description: Some("Kitchen Knife Sets from Stockholm to Arkansas".to_string()),
            },
            orders: vec![OrderJourney::new(
                Order::new("Kitchen Knife Sets"),
                vec![
                    StageSpec::ReceivedAtDepot {
                        depot_name: "Stockholm City".to_string(),
                    },
                    StageSpec::Dispatched {
                        truck_id: "JVY-354".to_string(),
                        driver_name: "Peter Parker".to_string(),
                    },
                    StageSpec::Delivered {
                        destination: "Arkansas".to_string(),
                        is_delivered: true,
                    },
                ],
            )],
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("journey.name", &self.journey.name)?;
        validate_non_empty_list("orders", &self.orders)?;

        // 訂單名稱允許空字串，但每筆訂單至少要有一個狀態
        for (index, order) in self.orders.iter().enumerate() {
            validate_non_empty_list(&format!("orders[{}].states", index), &order.states)?;
        }

        Ok(())
    }

    pub fn state_count(&self) -> usize {
        self.orders.iter().map(|o| o.states.len()).sum()
    }
}

impl JourneyProvider for JourneyConfig {
    fn journey_name(&self) -> &str {
        &self.journey.name
    }

    fn orders(&self) -> &[OrderJourney] {
        &self.orders
    }
}

impl Validate for JourneyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
