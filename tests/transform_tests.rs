use music_file_tag_masks::transform::{
    collapse_spaces, default_title_case_exemptions, first_letter_uppercase, insert_space_before_uppercase,
    substitute, title_case, underscore_to_space, CaseFold, Substitution, TransformOptions,
};

fn title(s: &str, roman: bool) -> String {
    title_case(s, &default_title_case_exemptions(), roman)
}

#[test]
fn underscores_and_encoded_spaces_become_spaces() {
    assert_eq!(underscore_to_space("Pink_Floyd%20-%20Money"), "Pink Floyd - Money");
}

#[test]
fn space_goes_before_inner_capitals() {
    assert_eq!(insert_space_before_uppercase("HelloWorld"), "Hello World");
    assert_eq!(insert_space_before_uppercase("ABC"), "A B C");
    assert_eq!(insert_space_before_uppercase("Hello World"), "Hello World");
}

#[test]
fn collapsing_twice_changes_nothing() {
    for input in ["a  b", "a _ _b", "__lead", "tail  ", "a b", ""] {
        let once = collapse_spaces(input);
        assert_eq!(collapse_spaces(&once), once);
    }
    assert_eq!(collapse_spaces("a   b"), "a b");
}

#[test]
fn substitution_replaces_every_occurrence() {
    assert_eq!(substitute("a-b-c", "-", " / "), "a / b / c");
    assert_eq!(substitute("ab", "", "."), "a.b");
}

#[test]
fn first_letter_only() {
    assert_eq!(first_letter_uppercase("hELLO wORLD"), "Hello world");
    assert_eq!(first_letter_uppercase(""), "");
}

#[test]
fn title_case_keeps_small_words_low() {
    assert_eq!(title("the dark side of the moon", false), "The Dark Side of the Moon");
}

#[test]
fn title_case_capitalizes_last_word_even_if_exempt() {
    assert_eq!(title("what are you looking at", false), "What Are You Looking At");
}

#[test]
fn title_case_upper_cases_roman_numerals_when_asked() {
    assert_eq!(title("rocky ii", true), "Rocky II");
    assert_eq!(title("rocky ii", false), "Rocky Ii");
    assert_eq!(title("part iii - the end", true), "Part III - the End");
}

#[test]
fn title_case_capitalizes_after_punctuation() {
    assert_eq!(title("rock (live at wembley)", false), "Rock (Live at Wembley)");
    assert_eq!(title("t.n.t", false), "T.N.T");
    assert_eq!(title("HELLO_WORLD", false), "Hello_World");
}

#[test]
fn pipeline_runs_steps_in_fixed_order() {
    // substitution runs before upper-casing, so the lower-case token still matches
    let opts = TransformOptions {
        substitute: Some(Substitution { from: "and".into(), to: "&".into() }),
        case: Some(CaseFold::Upper),
        ..TransformOptions::default()
    };
    assert_eq!(opts.apply("rock and roll"), "ROCK & ROLL");

    let opts = TransformOptions {
        underscore_to_space: true,
        title_case: true,
        ..TransformOptions::default()
    };
    assert_eq!(opts.apply("the_dark_side_of_the_moon"), "The Dark Side of the Moon");

    let opts = TransformOptions {
        underscore_to_space: true,
        remove_spaces: true,
        ..TransformOptions::default()
    };
    assert_eq!(opts.apply("a_b c"), "abc");
}

#[test]
fn disabled_pipeline_is_identity() {
    let opts = TransformOptions::default();
    assert!(opts.is_noop());
    assert_eq!(opts.apply("Some_Text  Here"), "Some_Text  Here");
}
