//! End-to-end tests through the script driver

use std::io::Cursor;

use interval_sum_tree::*;

#[test]
fn test_script_end_to_end() {
    let script = "\
values 1 3 5 7 9 11
sum 0 6
sum 1 3
sum 0 1
update 2 100
sum 1 3
sum 0 6
";
    let outcomes = run_script(Cursor::new(script), TreeConfig::default()).expect("script runs");
    let rendered: Vec<String> = outcomes.iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "sum [0, 6) = 36",
            "sum [1, 3) = 8",
            "sum [0, 1) = 1",
            "sum [1, 3) = 103",
            "sum [0, 6) = 131",
        ]
    );
}

#[test]
fn test_session_exposes_tree() {
    let mut session = Session::new(TreeConfig::tight());
    assert!(session.tree().is_none());

    session
        .execute(1, Command::Values(vec![42]))
        .expect("values builds the tree");
    session
        .execute(2, Command::Update { index: 0, value: -5 })
        .expect("update in range");

    let tree = session.tree().expect("tree built");
    assert_eq!(tree.sum(0, 1), -5);
    assert_eq!(tree.capacity(), 2);

    let outcome = session
        .execute(3, Command::Get { index: 0 })
        .expect("get in range");
    assert_eq!(outcome, Some(Outcome::Get { index: 0, value: -5 }));
}

#[test]
fn test_get_out_of_range_is_tree_error() {
    let err = run_script(Cursor::new("values 1\nget 1\n"), TreeConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Tree(IntervalSumError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert_eq!(err.to_string(), "tree error: index 1 out of range for 1 elements");
}

#[test]
fn test_empty_values_line() {
    let outcomes =
        run_script(Cursor::new("values\nsum 0 4\ntotal\n"), TreeConfig::default()).unwrap();
    assert_eq!(
        outcomes,
        vec![Outcome::Sum { left: 0, right: 4, value: 0 }, Outcome::Total(0)]
    );
}
