use crate::core::{Dog, Person, Record, PUG};
use crate::utils::error::{KataError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The katas this crate knows how to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum KataKind {
    TranslateKey,
    TallyInCity,
    GetPugOwners,
    GenerateMatrix,
    NoBoringZeros,
    FindWrongWayFruit,
    AlphabetReplace,
}

impl KataKind {
    pub const ALL: [KataKind; 7] = [
        KataKind::TranslateKey,
        KataKind::TallyInCity,
        KataKind::GetPugOwners,
        KataKind::GenerateMatrix,
        KataKind::NoBoringZeros,
        KataKind::FindWrongWayFruit,
        KataKind::AlphabetReplace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KataKind::TranslateKey => "translate_key",
            KataKind::TallyInCity => "tally_in_city",
            KataKind::GetPugOwners => "get_pug_owners",
            KataKind::GenerateMatrix => "generate_matrix",
            KataKind::NoBoringZeros => "no_boring_zeros",
            KataKind::FindWrongWayFruit => "find_wrong_way_fruit",
            KataKind::AlphabetReplace => "alphabet_replace",
        }
    }

    /// 將 JSON 輸入解碼為該 kata 的型別化輸入
    pub fn decode_input<T: DeserializeOwned>(&self, input: serde_json::Value) -> Result<T> {
        serde_json::from_value(input)
            .map_err(|e| KataError::invalid_argument(self.name(), format!("malformed input: {}", e)))
    }
}

impl fmt::Display for KataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

fn default_city() -> String {
    "Manchester".to_string()
}

fn default_breed() -> String {
    PUG.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateKeyInput {
    pub record: Record,
    pub old_key: String,
    pub new_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TallyInCityInput {
    pub people: Vec<Person>,
    #[serde(default = "default_city")]
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PugOwnersInput {
    pub dogs: Vec<Dog>,
    #[serde(default = "default_breed")]
    pub breed: String,
}

/// Matrix size is kept as raw JSON so negative and fractional sizes surface as
/// `InvalidArgument` rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateMatrixInput {
    pub n: serde_json::Value,
}

impl GenerateMatrixInput {
    pub fn size(&self) -> Result<usize> {
        self.n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                KataError::invalid_argument(
                    KataKind::GenerateMatrix.name(),
                    format!("n must be a positive integer, got {}", self.n),
                )
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoBoringZerosInput {
    pub n: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrchardInput {
    pub orchard: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlphabetReplaceInput {
    pub text: String,
}
