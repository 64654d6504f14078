use super::*;

// =============================================================
// Helpers
// =============================================================

fn todo(id: &str, body: &str, completed: bool) -> Todo {
    Todo { id: Some(id.to_owned()), completed, body: body.to_owned() }
}

fn loaded_state() -> TodosState {
    let mut state = TodosState::default();
    state.loaded(vec![todo("a", "write tests", false), todo("b", "ship", true)]);
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = TodosState { error: Some("boom".to_owned()), ..TodosState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn loaded_replaces_items() {
    let mut state = loaded_state();
    state.loaded(vec![todo("c", "new", false)]);
    assert_eq!(state.items, vec![todo("c", "new", false)]);
    assert!(!state.loading);
}

#[test]
fn failed_keeps_items_and_records_error() {
    let mut state = loaded_state();
    state.begin_load();
    state.failed("list todos request failed: 500");
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error.as_deref(), Some("list todos request failed: 500"));
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn created_appends() {
    let mut state = loaded_state();
    state.created(todo("c", "celebrate", false));
    assert_eq!(state.items.last().map(|t| t.body.as_str()), Some("celebrate"));
}

#[test]
fn completed_flags_matching_todo_only() {
    let mut state = loaded_state();
    assert!(state.completed("a"));
    assert!(state.items.iter().all(|t| t.completed));
    assert!(!state.completed("missing"));
}

#[test]
fn removed_drops_matching_todo() {
    let mut state = loaded_state();
    assert!(state.removed("b"));
    assert_eq!(state.items, vec![todo("a", "write tests", false)]);
    assert!(!state.removed("b"));
}

#[test]
fn rejected_keeps_items_and_loading_untouched() {
    let mut state = loaded_state();
    let before = state.items.clone();
    state.rejected("create todo request failed: 500");
    assert_eq!(state.items, before);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("create todo request failed: 500"));
}

#[test]
fn rejected_during_load_does_not_end_loading() {
    let mut state = TodosState::default();
    state.begin_load();
    state.rejected("Body is required");
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn successful_mutation_clears_rejection() {
    let mut state = loaded_state();
    state.rejected("delete todo request failed: 404");
    state.created(todo("c", "retry", false));
    assert!(state.error.is_none());
}

#[test]
fn initial_state_is_not_loading() {
    // Server render and first hydrate pass both start from this value.
    let state = TodosState::default();
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
}
