use anyhow::Result;
use kata_log::utils::error::ErrorCategory;
use kata_log::utils::validation::Validate;
use kata_log::{DrillOutcome, DrillSheet, KataEngine};
use tempfile::TempDir;

/// 從暫存目錄載入 drill sheet 並執行
#[test]
fn test_run_sheet_from_temp_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sheet_path = temp_dir.path().join("mine.toml");

    std::fs::write(
        &sheet_path,
        r#"
[sheet]
name = "my-practice"

[[drills]]
name = "pug owners in a different breed"
kata = "get_pug_owners"
input = { dogs = [{ name = "Rex", breed = "Collie", owner = "Sam" }], breed = "Collie" }
expected = ["Sam"]

[[drills]]
name = "wrong guess"
kata = "no_boring_zeros"
input = { n = 900 }
expected = 90

[[drills]]
name = "fruit with missing input"
kata = "find_wrong_way_fruit"
expected = 0
"#,
    )?;

    let sheet = DrillSheet::from_file(&sheet_path)?;
    sheet.validate()?;

    let report = KataEngine::new().run_sheet(&sheet);

    assert_eq!(report.sheet, "my-practice");
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.results[0].outcome, DrillOutcome::Passed);
    assert_eq!(
        report.results[1].outcome,
        DrillOutcome::Failed {
            expected: "90".to_string(),
            actual: "9".to_string(),
        }
    );
    match &report.results[2].outcome {
        DrillOutcome::Errored { message } => assert!(message.contains("find_wrong_way_fruit")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_invalid_sheet_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sheet_path = temp_dir.path().join("broken.toml");

    std::fs::write(
        &sheet_path,
        r#"
[sheet]
name = "broken"

[[drills]]
name = "bad json"
kata = "generate_matrix"
input = { n = 1 }
expected_json = "[[null"
"#,
    )?;

    let sheet = DrillSheet::from_file(&sheet_path)?;
    let err = sheet.validate().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(err.to_string().contains("expected_json"));
    Ok(())
}

#[test]
fn test_env_var_in_sheet_file() -> Result<()> {
    std::env::set_var("KATA_LOG_FILE_TEST_WORD", "abc");

    let temp_dir = TempDir::new()?;
    let sheet_path = temp_dir.path().join("env.toml");
    std::fs::write(
        &sheet_path,
        r#"
[sheet]
name = "env"

[[drills]]
name = "letters from env"
kata = "alphabet_replace"
input = { text = "${KATA_LOG_FILE_TEST_WORD}" }
expected = "1 2 3"
"#,
    )?;

    let sheet = DrillSheet::from_file(&sheet_path)?;
    let report = KataEngine::new().run_sheet(&sheet);
    assert!(report.all_passed());

    std::env::remove_var("KATA_LOG_FILE_TEST_WORD");
    Ok(())
}
