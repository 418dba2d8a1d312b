use docqa::qa::parse_qa_text;

#[test]
fn test_extracts_ordered_records() {
    let set = parse_qa_text("Q1: What?\nAnswer here.\nQ2: Why?\nBecause.");

    let records = set.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].question, "What?");
    assert_eq!(records[0].answer, "Answer here.");
    assert_eq!(records[1].question, "Why?");
    assert_eq!(records[1].answer, "Because.");
}

#[test]
fn test_trailing_question_yields_empty_answer_record() {
    let set = parse_qa_text("Q1: Answered?\nYes.\nQ2: Dangling?");

    assert_eq!(set.len(), 2);
    let last = &set.records()[1];
    assert_eq!(last.question, "Dangling?");
    assert_eq!(last.answer, "");
    assert_eq!(last.order, 1);
}

#[test]
fn test_empty_input_yields_empty_set() {
    assert!(parse_qa_text("").is_empty());
}

#[test]
fn test_multiline_answers_join_with_spaces() {
    let raw = "Q1: Long answer?\nFirst fragment,\nsecond fragment,\nthird.\nQ2: Next?\nShort.";
    let set = parse_qa_text(raw);

    assert_eq!(
        set.records()[0].answer,
        "First fragment, second fragment, third."
    );
    assert_eq!(set.records()[1].answer, "Short.");
}

#[test]
fn test_blank_lines_between_records_are_skipped() {
    let raw = "Q1: First?\n\nAn answer.\n\n\nQ2: Second?\n\nAnother answer.\n";
    let set = parse_qa_text(raw);

    assert_eq!(set.len(), 2);
    assert_eq!(set.records()[0].answer, "An answer.");
    assert_eq!(set.records()[1].answer, "Another answer.");
}

#[test]
fn test_inline_labels_from_model_output() {
    // The shape the generation prompt asks the model for
    let raw = "Q1: What is ownership?\nA1: A set of compile-time rules.\n\
               Q2: What checks it?\nA2: The borrow checker.\n\
               Q3: Is it optional?\nA3: No.";
    let set = parse_qa_text(raw);

    assert_eq!(set.len(), 3);
    assert_eq!(set.records()[0].answer, "A set of compile-time rules.");
    assert_eq!(set.records()[2].question, "Is it optional?");
    assert_eq!(set.records()[2].answer, "No.");
}

#[test]
fn test_orders_follow_first_seen_sequence() {
    let raw = "Q: a?\n1\nQ: b?\n2\nQ: c?\n3";
    let set = parse_qa_text(raw);

    let orders: Vec<usize> = set.iter().map(|r| r.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}
