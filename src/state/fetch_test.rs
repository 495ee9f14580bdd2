use super::*;

#[test]
fn initial_fetch_walks_idle_loading_loaded() {
    let state = FetchState::<u32>::Idle;
    let state = state.begin();
    assert_eq!(state, FetchState::Loading(None));
    assert!(state.is_loading());
    assert!(state.data().is_none());

    let state = FetchState::succeed(7);
    assert_eq!(state.data(), Some(&7));
    assert!(!state.is_loading());
}

#[test]
fn refetch_keeps_prior_data_while_loading() {
    let state = FetchState::Loaded(7).begin();
    assert!(state.is_loading());
    assert_eq!(state.data(), Some(&7));
}

#[test]
fn failure_retains_prior_snapshot() {
    let state = FetchState::Loaded(7).begin().fail("boom");
    assert_eq!(state.error(), Some("boom"));
    assert_eq!(state.data(), Some(&7));

    // A later successful refetch clears the error.
    let state = state.begin();
    assert_eq!(state.data(), Some(&7));
    let state = FetchState::succeed(8);
    assert!(state.error().is_none());
    assert_eq!(state.data(), Some(&8));
}

#[test]
fn failure_without_prior_data_has_none() {
    let state = FetchState::<u32>::Idle.begin().fail("boom");
    assert_eq!(state, FetchState::Failed { error: "boom".to_owned(), prior: None });
    assert!(state.data().is_none());
}
