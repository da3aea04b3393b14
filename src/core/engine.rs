use crate::config::drill_sheet::{Drill, DrillSheet, Expectation};
use crate::core::kata::{
    AlphabetReplaceInput, GenerateMatrixInput, NoBoringZerosInput, OrchardInput, PugOwnersInput,
    TallyInCityInput, TranslateKeyInput,
};
use crate::core::{
    alphabet_replace, find_wrong_way_fruit, generate_matrix, get_pug_owners, no_boring_zeros,
    tally_in_city, translate_key, KataKind, Matrix,
};
use crate::utils::error::Result;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DrillOutcome {
    Passed,
    Failed { expected: String, actual: String },
    Errored { message: String },
}

#[derive(Debug, Clone)]
pub struct DrillResult {
    pub name: String,
    pub kata: KataKind,
    pub outcome: DrillOutcome,
}

impl DrillResult {
    pub fn passed(&self) -> bool {
        self.outcome == DrillOutcome::Passed
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrillReport {
    pub sheet: String,
    pub results: Vec<DrillResult>,
}

impl DrillReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// 任一 drill 未通過時為 1
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for DrillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            match &result.outcome {
                DrillOutcome::Passed => writeln!(f, "✅ {} ({})", result.name, result.kata)?,
                DrillOutcome::Failed { expected, actual } => {
                    writeln!(f, "❌ {} ({})", result.name, result.kata)?;
                    writeln!(f, "     expected: {}", expected)?;
                    writeln!(f, "     actual:   {}", actual)?;
                }
                DrillOutcome::Errored { message } => {
                    writeln!(f, "💥 {} ({}): {}", result.name, result.kata, message)?
                }
            }
        }
        write!(
            f,
            "\n{}: {} passed, {} failed",
            self.sheet,
            self.passed(),
            self.failed()
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct KataEngine {
    kata_filter: Option<KataKind>,
}

impl KataEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts `run_sheet` to drills of one kata.
    pub fn with_filter(kata: Option<KataKind>) -> Self {
        Self { kata_filter: kata }
    }

    /// Decodes `input`, solves `kind` and encodes the answer as JSON.
    pub fn solve(&self, kind: KataKind, input: Value) -> Result<Value> {
        tracing::debug!("Solving {} with input {}", kind, input);

        let answer = match kind {
            KataKind::TranslateKey => {
                let input: TranslateKeyInput = kind.decode_input(input)?;
                serde_json::to_value(translate_key(&input.record, &input.old_key, &input.new_key))?
            }
            KataKind::TallyInCity => {
                let input: TallyInCityInput = kind.decode_input(input)?;
                Value::from(tally_in_city(&input.people, &input.city))
            }
            KataKind::GetPugOwners => {
                let input: PugOwnersInput = kind.decode_input(input)?;
                Value::from(get_pug_owners(&input.dogs, &input.breed))
            }
            KataKind::GenerateMatrix => {
                let input: GenerateMatrixInput = kind.decode_input(input)?;
                let matrix: Matrix<Value> = generate_matrix(input.size()?)?;
                serde_json::to_value(matrix)?
            }
            KataKind::NoBoringZeros => {
                let input: NoBoringZerosInput = kind.decode_input(input)?;
                Value::from(no_boring_zeros(input.n))
            }
            KataKind::FindWrongWayFruit => {
                let input: OrchardInput = kind.decode_input(input)?;
                Value::from(find_wrong_way_fruit(&input.orchard)?)
            }
            KataKind::AlphabetReplace => {
                let input: AlphabetReplaceInput = kind.decode_input(input)?;
                Value::from(alphabet_replace(&input.text)?)
            }
        };

        Ok(answer)
    }

    /// Runs every drill of the sheet in declaration order.
    pub fn run_sheet(&self, sheet: &DrillSheet) -> DrillReport {
        tracing::info!("Running drill sheet '{}'", sheet.sheet.name);

        let results: Vec<DrillResult> = sheet
            .drills_for(self.kata_filter)
            .map(|drill| self.run_drill(drill))
            .collect();

        let report = DrillReport {
            sheet: sheet.sheet.name.clone(),
            results,
        };

        tracing::info!(
            "Drill sheet '{}' finished: {} passed, {} failed",
            report.sheet,
            report.passed(),
            report.failed()
        );
        report
    }

    pub fn run_drill(&self, drill: &Drill) -> DrillResult {
        tracing::debug!("Running drill '{}' ({})", drill.name, drill.kata);

        let outcome = match drill.expectation() {
            Ok(expectation) => Self::check(expectation, self.solve(drill.kata, drill.input.clone())),
            Err(e) => DrillOutcome::Errored {
                message: e.to_string(),
            },
        };

        if outcome != DrillOutcome::Passed {
            tracing::warn!("Drill '{}' did not pass: {:?}", drill.name, outcome);
        }

        DrillResult {
            name: drill.name.clone(),
            kata: drill.kata,
            outcome,
        }
    }

    fn check(expectation: Expectation, actual: Result<Value>) -> DrillOutcome {
        match (expectation, actual) {
            (Expectation::Answer(expected), Ok(answer)) if expected == answer => DrillOutcome::Passed,
            (Expectation::Answer(expected), Ok(answer)) => DrillOutcome::Failed {
                expected: expected.to_string(),
                actual: answer.to_string(),
            },
            (Expectation::Answer(_), Err(e)) => DrillOutcome::Errored {
                message: e.to_string(),
            },
            (Expectation::Error(category), Err(e)) if e.category() == category => {
                DrillOutcome::Passed
            }
            (Expectation::Error(category), Err(e)) => DrillOutcome::Failed {
                expected: format!("{} error", category.as_str()),
                actual: format!("{} error: {}", e.category().as_str(), e),
            },
            (Expectation::Error(category), Ok(answer)) => DrillOutcome::Failed {
                expected: format!("{} error", category.as_str()),
                actual: answer.to_string(),
            },
        }
    }
}
