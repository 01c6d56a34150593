use lesson_solver_engine::parsing::{parse_solution, snapshot};

fn parse_fixture(name: &str) -> String {
    let raw = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse_solution(&raw);
    snapshot::invariants(&raw, &blocks);

    snapshot::normalize(&blocks).to_string()
}

#[test]
fn fixture_mixed_exercises() {
    insta::assert_snapshot!(parse_fixture("mixed_exercises"), @r#"
    heading "Exercise 1: Questions and Answers"
    qa #1 "What did Ali find in the garden?" -> "Ali found a small, injured bird."
    qa #2 "Why did the bird need help?" -> "Its wing was hurt,\nso it could not fly."
    heading "Exercise 2: Fill in the Blanks"
    fill-in "1. The bird was hiding under the **rose bush**."
    fill-in "2. Ali gave the bird some **water** and seeds."
    heading "Exercise 3: Multiple Choice"
    qa #1 "Where is the bird?\nA) Cage\nB) Box" -> "B) Box"
    heading "Exercise 4: Match the Columns"
    table "| A | B |\n|---|---|\n| Bird | Nest |"
    heading "Exercise 5: Translation"
    other "Translate into Urdu."
    other "1. The bird flew away."
    "#);
}

#[test]
fn fixture_stray_questions() {
    insta::assert_snapshot!(parse_fixture("stray_questions"), @r#"
    heading "Exercise 1"
    other "Answer the following questions."
    qa #1 "Who wrote the letter?" -> "Sara wrote the letter."
    fill-in "2. **Question:** Who received it?"
    qa #2 "When was it sent?" -> "On Monday."
    "#);
}

#[test]
fn fixture_unstructured() {
    insta::assert_snapshot!(parse_fixture("unstructured"), @r#"
    other "Sorry, the photos are too blurry to read.\n\nPlease retake them in better light."
    "#);
}

/// Only `##` opens an exercise; deeper headings stay in the body as plain blocks.
#[test]
fn fixture_deeper_headings() {
    insta::assert_snapshot!(parse_fixture("deeper_headings"), @r####"
    other "### Exercise 1: Vocabulary"
    qa #1 "What is a noun?" -> "A naming word."
    heading "Exercise 2"
    other "### Part A"
    fill-in "1. The cat sat on the **mat**."
    "####);
}

/// Question numbers restart with every exercise heading.
#[test]
fn numbering_restarts_per_exercise() {
    use lesson_solver_engine::number_blocks;

    let raw = "## One\n1. **Question:** a? **Answer:** a\n2. **Question:** b? **Answer:** b\n---\n## Two\n1. **Question:** c? **Answer:** c";
    let blocks = parse_solution(raw);
    let numbers: Vec<_> = number_blocks(&blocks).iter().map(|nb| nb.number).collect();

    assert_eq!(numbers, vec![None, Some(1), Some(2), None, Some(1)]);
}
