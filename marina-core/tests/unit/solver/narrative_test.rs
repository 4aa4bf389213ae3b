use super::*;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::utils::GenericError;
use std::sync::{Arc, Mutex};

struct BrokenNarrator;

impl Narrator for BrokenNarrator {
    fn narrate(&self, _: &RunResult) -> GenericResult<String> {
        Err(GenericError::from("service is not reachable"))
    }
}

struct PanickingNarrator;

impl Narrator for PanickingNarrator {
    fn narrate(&self, _: &RunResult) -> GenericResult<String> {
        panic!("narrator is broken")
    }
}

fn create_result() -> RunResult {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 10.)), test_boat("b2", 20., (0., 10.))],
        vec![test_slot("s1", 10.)],
    );

    create_test_solver().run(&create_test_request(snapshot, &["first_fit", "best_fit"])).expect("run should succeed")
}

#[test]
fn can_summarize_run() {
    let result = create_result();

    let text = SummaryNarrator::default().narrate(&result).expect("can narrate");

    assert!(text.contains("Strategy 'first_fit' was selected"));
    assert!(text.contains("placed 1 of 2 boats"));
    assert!(text.contains("b2: no slot accepts boat dimensions"));
    assert!(text.contains("best_fit: 1 placed"));
}

#[test]
fn can_swallow_narrator_failures() {
    let result = create_result();
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let messages_clone = messages.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| messages_clone.lock().unwrap().push(msg.to_string()));

    assert_eq!(narrate_safely(Some(&BrokenNarrator), &result, &logger), None);
    assert_eq!(narrate_safely(Some(&PanickingNarrator), &result, &logger), None);
    assert_eq!(narrate_safely(None, &result, &logger), None);
    assert!(narrate_safely(Some(&SummaryNarrator::default()), &result, &logger).is_some());
    assert_eq!(messages.lock().unwrap().len(), 2);
}
