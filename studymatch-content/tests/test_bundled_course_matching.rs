use studymatch_content::{bundled_course_data, parse_course_data};
use studymatch_core::{select_best_match, MatchOutcome, NoMatchReason};

/// Real-data regression: the canonical "push to an array" question.
#[test]
fn test_push_question_matches_arrays() {
    let kb = bundled_course_data().unwrap();
    let out = select_best_match("How do I push to an array?", Some(&kb)).unwrap();
    let m = out.matched().expect("expected a match");
    assert_eq!(m.module.title, "Arrays");
    assert_eq!(m.matched_keywords, vec!["push", "array"]);
    assert_eq!(m.confidence, 100);
}

/// Real-data regression: plural token hits "error" by containment only.
#[test]
fn test_try_catch_question_matches_error_handling() {
    let kb = bundled_course_data().unwrap();
    let out = select_best_match("How do I handle errors with try and catch?", Some(&kb)).unwrap();
    let m = out.matched().unwrap();
    assert_eq!(m.module.title, "Error Handling");
    assert_eq!(m.matched_keywords, vec!["error", "try", "catch"]);
    // 3 containment hits + 2 exact * 2 over 4 tokens * 3
    assert_eq!(m.score, 7);
    assert_eq!(m.confidence, 58);
}

/// Real-data regression: matched keywords keep their original casing.
#[test]
fn test_local_storage_question_reports_original_keywords() {
    let kb = bundled_course_data().unwrap();
    let out = select_best_match("How do I save JSON in localStorage?", Some(&kb)).unwrap();
    let m = out.matched().unwrap();
    assert_eq!(m.module.title, "Web Storage");
    assert_eq!(m.matched_keywords, vec!["json", "localStorage", "storage"]);
    assert_eq!(m.confidence, 78);
}

/// "callback" appears in both Functions and Async Programming; list order wins.
#[test]
fn test_shared_keyword_tie_prefers_first_module() {
    let kb = bundled_course_data().unwrap();
    let out = select_best_match("callback", Some(&kb)).unwrap();
    assert_eq!(out.matched().unwrap().module.title, "Functions");
}

#[test]
fn test_unrelated_and_empty_questions() {
    let kb = bundled_course_data().unwrap();
    assert_eq!(
        select_best_match("quantum chromodynamics", Some(&kb)).unwrap(),
        MatchOutcome::NoMatch(NoMatchReason::BelowThreshold)
    );
    assert_eq!(
        select_best_match("the is a an", Some(&kb)).unwrap(),
        MatchOutcome::NoMatch(NoMatchReason::NoSignificantTerms)
    );
}

#[test]
fn test_keywordless_module_never_wins() {
    let kb = parse_course_data(
        r#"{"modules":[
            {"title":"Overview"},
            {"title":"Arrays","keywords":["array"]}
        ]}"#,
    )
    .unwrap();
    let out = select_best_match("array overview", Some(&kb)).unwrap();
    assert_eq!(out.matched().unwrap().module.title, "Arrays");
}
