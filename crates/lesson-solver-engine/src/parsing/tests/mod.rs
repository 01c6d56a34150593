//! Behavioural tests for the whole parsing pipeline.
//!
//! Every case also runs the ordering invariant from `snapshot::invariants`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ContentBlock, parse_solution, snapshot};

fn parse(raw: &str) -> Vec<ContentBlock> {
    let blocks = parse_solution(raw);
    snapshot::invariants(raw, &blocks);
    blocks
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\n")]
#[case("---")]
#[case("\n---\n   \n---\n")]
fn empty_and_whitespace_input(#[case] raw: &str) {
    assert!(parse(raw).is_empty());
}

#[test]
fn heading_only() {
    assert_eq!(parse("## Title"), vec![ContentBlock::heading("Title")]);
}

#[test]
fn two_inline_question_answer_pairs() {
    let raw = "1. **Question:** What is 2+2? **Answer:** 4\n\n2. **Question:** What is 3+3? **Answer:** 6";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::qa("What is 2+2?", "4"),
            ContentBlock::qa("What is 3+3?", "6"),
        ]
    );
}

#[rstest]
#[case("| Word | Meaning |\n|---|---|\n| big | large |")]
#[case("| Word | Meaning |\n| --- | --- |\n| big | large |\n")]
#[case("\n  | A | B |\n|:-|-:|\n| 1 | 2 |  \n")]
fn markdown_table_is_one_block(#[case] raw: &str) {
    assert_eq!(parse(raw), vec![ContentBlock::table(raw.trim())]);
}

#[test]
fn bold_without_answer_is_fill_in() {
    let raw = "1. The capital of France is **Paris**.";
    assert_eq!(parse(raw), vec![ContentBlock::fill_in(raw)]);
}

#[test]
fn plain_sentence_is_other() {
    let raw = "Translate the following passage.";
    assert_eq!(parse(raw), vec![ContentBlock::other(raw)]);
}

#[test]
fn exercises_keep_their_order() {
    let raw = "## Exercise 1\n\n1. **Question:** A? **Answer:** a\n\n2. **Question:** B? **Answer:** b\n\n---\n\n## Exercise 2\n\n1. **Question:** C?\n**Answer:** c\n";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::heading("Exercise 1"),
            ContentBlock::qa("A?", "a"),
            ContentBlock::qa("B?", "b"),
            ContentBlock::heading("Exercise 2"),
            ContentBlock::qa("C?", "c"),
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    let raw = "## Ex\n1. **Question:** Why? **Answer:** Because.\n2. Fill **this**.\n| a | b |";
    assert_eq!(parse_solution(raw), parse_solution(raw));
}

#[test]
fn answer_text_is_only_trimmed() {
    let raw = "1. **Question:** Describe it.\n**Answer:**\n\n  - first point\n  - second  point\n\n";
    assert_eq!(
        parse(raw),
        vec![ContentBlock::qa(
            "Describe it.",
            "- first point\n  - second  point"
        )]
    );
}

#[test]
fn unstructured_response_degrades_to_other() {
    let raw = "I could not read these pages clearly.\nPlease upload sharper photos.";
    assert_eq!(parse(raw), vec![ContentBlock::other(raw)]);
}

#[test]
fn multiple_choice_exercise() {
    let raw = "## Exercise 3\n1. Plants make food by\nA) Digestion\nB) Photosynthesis\n**Answer:** B) Photosynthesis\n\n2. Water boils at\nA) 50°C\nB) 100°C\n**Answer:** B) 100°C";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::heading("Exercise 3"),
            ContentBlock::qa(
                "Plants make food by\nA) Digestion\nB) Photosynthesis",
                "B) Photosynthesis"
            ),
            ContentBlock::qa("Water boils at\nA) 50°C\nB) 100°C", "B) 100°C"),
        ]
    );
}

#[test]
fn heading_followed_by_instructions_and_items() {
    let raw = "## Exercise 2: Fill in the blanks\nComplete the sentences.\n1. Birds **fly**.\n2. Fish **swim**.";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::heading("Exercise 2: Fill in the blanks"),
            ContentBlock::other("Complete the sentences."),
            ContentBlock::fill_in("1. Birds **fly**."),
            ContentBlock::fill_in("2. Fish **swim**."),
        ]
    );
}

#[test]
fn right_to_left_text_passes_through() {
    let raw = "## مشق ۱\n\n1. **Question:** پاکستان کا دارالحکومت کیا ہے؟\n**Answer:** اسلام آباد";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::heading("مشق ۱"),
            ContentBlock::qa("پاکستان کا دارالحکومت کیا ہے؟", "اسلام آباد"),
        ]
    );
}

#[test]
fn items_after_the_last_pair_are_their_own_blocks() {
    let raw = "1. **Question:** What is 2+2?\n**Answer:** 4\n\n2. The sky is **blue**.\n3. Which is a fruit?\nA) Rock\nB) Apple\n**Answer:** B) Apple";
    assert_eq!(
        parse(raw),
        vec![
            ContentBlock::qa("What is 2+2?", "4"),
            ContentBlock::fill_in("2. The sky is **blue**."),
            ContentBlock::qa("Which is a fruit?\nA) Rock\nB) Apple", "B) Apple"),
        ]
    );
}
