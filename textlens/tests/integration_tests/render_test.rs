// tests/integration_tests/render_test.rs
use textlens::{DisplayMode, EMPTY_INPUT_PROMPT, analyze, on_input_change, render};

#[test]
fn test_each_mode_renders_expected_sections() {
    let text = "Cats sleep. Dogs bark!";
    let outcome = analyze(text);

    let none = render(text, &outcome, DisplayMode::None);
    assert!(none.contains("Summary"));
    assert!(none.contains("Top repeated words"));
    assert!(!none.contains("Detailed view"));

    let words = render(text, &outcome, DisplayMode::Words);
    assert!(words.contains("1. cats\n2. sleep\n3. dogs\n4. bark"));

    let characters = render(text, &outcome, DisplayMode::Characters);
    assert!(characters.contains("Characters\nCats sleep. Dogs bark!"));

    let sentences = render(text, &outcome, DisplayMode::Sentences);
    assert!(sentences.contains("1. Cats sleep\n2. Dogs bark"));

    let all = render(text, &outcome, DisplayMode::All);
    assert!(all.contains("1. cats"));
    assert!(all.contains("Characters\nCats sleep. Dogs bark!"));
    assert!(all.contains("2. Dogs bark"));
}

#[test]
fn test_input_change_handler_matches_render() {
    let text = "Same output either way.";
    assert_eq!(
        on_input_change(text, DisplayMode::All),
        render(text, &analyze(text), DisplayMode::All)
    );
}

#[test]
fn test_input_change_handler_prompts_on_empty() {
    assert_eq!(on_input_change("", DisplayMode::None), EMPTY_INPUT_PROMPT);
}
