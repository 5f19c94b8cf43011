// tests/integration_tests/edge_cases_test.rs
use anyhow::Result;
use textlens::analyze;

#[test]
fn test_edge_cases() -> Result<()> {
    // All punctuation
    let report = analyze("!!! ... ???")?;
    assert_eq!(report.word_count(), 0);
    assert_eq!(report.sentence_count(), 0);
    assert_eq!(report.char_count(), 11);

    // One letter among whitespace
    let report = analyze("\n\n   z   \t")?;
    assert_eq!(report.words(), ["z"]);
    assert_eq!(report.sentences(), ["z"]);
    assert_eq!(report.avg_sentence_length(), 1.0);

    // A very long single line
    let long_line = "word ".repeat(10_000);
    let report = analyze(&long_line)?;
    assert_eq!(report.word_count(), 10_000);
    assert_eq!(report.sentence_count(), 1);
    assert_eq!(report.reading_time_minutes(), 50);
    assert_eq!(report.avg_sentence_length(), 10_000.0);

    // Decimals split like sentence ends
    let report = analyze("It costs 3.50 today.")?;
    assert_eq!(report.sentences(), ["It costs 3", "50 today"]);
    assert_eq!(report.words(), ["it", "costs", "3", "50", "today"]);

    // Symbols and emoji are characters but not words
    let report = analyze("🙂 + 🙂 = 2")?;
    assert_eq!(report.words(), ["2"]);
    assert_eq!(report.char_count(), 9);

    Ok(())
}
