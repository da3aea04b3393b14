use crate::core::KataKind;
use crate::utils::error::{ErrorCategory, KataError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSheet {
    pub sheet: SheetInfo,
    #[serde(default)]
    pub drills: Vec<Drill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One worked example: a kata, its input and what it should produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    pub name: String,
    pub kata: KataKind,
    #[serde(default)]
    pub input: serde_json::Value,
    /// Expected answer written directly in TOML.
    pub expected: Option<serde_json::Value>,
    /// Expected answer as a JSON string, for answers TOML cannot spell (e.g. `null`).
    pub expected_json: Option<String>,
    /// Expected error category, e.g. `"not_found"`.
    pub expect_error: Option<String>,
}

/// What a drill is checked against.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    Answer(serde_json::Value),
    Error(ErrorCategory),
}

impl Drill {
    pub fn expectation(&self) -> Result<Expectation> {
        let field = format!("drills.{}", self.name);
        match (&self.expected, &self.expected_json, &self.expect_error) {
            (Some(value), None, None) => Ok(Expectation::Answer(value.clone())),
            (None, Some(raw), None) => serde_json::from_str(raw)
                .map(Expectation::Answer)
                .map_err(|e| KataError::InvalidConfigValueError {
                    field: format!("{}.expected_json", field),
                    value: raw.clone(),
                    reason: format!("Invalid JSON: {}", e),
                }),
            (None, None, Some(category)) => ErrorCategory::parse(category)
                .map(Expectation::Error)
                .ok_or_else(|| KataError::InvalidConfigValueError {
                    field: format!("{}.expect_error", field),
                    value: category.clone(),
                    reason: format!(
                        "Unknown error category. Valid categories: {}",
                        ErrorCategory::ALL
                            .iter()
                            .map(|c| c.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                }),
            _ => Err(KataError::ConfigValidationError {
                field,
                message: "Set exactly one of expected, expected_json or expect_error".to_string(),
            }),
        }
    }
}

impl DrillSheet {
    /// 從 TOML 檔案載入 drill sheet
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析 drill sheet
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CITY})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 只保留指定 kata 的 drills
    pub fn drills_for(&self, kata: Option<KataKind>) -> impl Iterator<Item = &Drill> {
        self.drills
            .iter()
            .filter(move |drill| kata.map_or(true, |k| drill.kata == k))
    }

    /// `--dry-run` 的輸出：每個 drill 一行
    pub fn listing(&self, kata: Option<KataKind>) -> Vec<String> {
        self.drills_for(kata)
            .map(|drill| format!("{:<24} {}", drill.kata, drill.name))
            .collect()
    }
}

impl Validate for DrillSheet {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sheet.name", &self.sheet.name)?;
        validate_positive_number("drills", self.drills.len(), 1)?;

        for drill in &self.drills {
            validate_non_empty_string("drills.name", &drill.name)?;
            drill.expectation()?;
        }

        validate_unique_names("drills.name", self.drills.iter().map(|d| d.name.as_str()))
    }
}
