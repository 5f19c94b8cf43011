// tests/integration_tests/file_input_test.rs
use super::common::{create_test_file, text_args};
use anyhow::Result;
use tempfile::TempDir;
use textlens::{Args, InputError, execute};

fn file_args(path: std::path::PathBuf, dir: &TempDir) -> Result<Args> {
    Ok(Args {
        text: None,
        file: Some(path),
        ..text_args("", dir.path())?
    })
}

#[test]
fn test_uploaded_file_is_analyzed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "upload.txt", "Short note. Another one!")?;

    let output = execute(file_args(path, &temp_dir)?)?;
    assert!(output.contains("Words:         4"), "Output was:\n{output}");
    assert!(output.contains("Sentences:     2"), "Output was:\n{output}");
    Ok(())
}

#[test]
fn test_invalid_utf8_upload_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "latin1.txt", [0x63, 0x61, 0x66, 0xe9])?;

    let err = execute(file_args(path, &temp_dir)?).unwrap_err();
    let input_err = err
        .downcast_ref::<InputError>()
        .expect("decode failure should surface as InputError");
    assert!(matches!(input_err, InputError::Decode { .. }));
    assert_eq!(input_err.exit_code(), 65);
    Ok(())
}

#[test]
fn test_blank_file_prints_prompt() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "blank.txt", "   \n\n")?;

    let output = execute(file_args(path, &temp_dir)?)?;
    assert_eq!(output, textlens::EMPTY_INPUT_PROMPT);
    Ok(())
}
