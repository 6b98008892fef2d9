use super::*;

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert_eq!(state.provider, None);
    assert!(!state.is_signed_in());
}

#[test]
fn sign_in_records_provider() {
    let mut state = SessionState::default();
    state.sign_in(AuthProvider::Google);
    assert_eq!(state.provider, Some(AuthProvider::Google));
    assert!(state.is_signed_in());
}

#[test]
fn sign_in_again_replaces_provider() {
    let mut state = SessionState::default();
    state.sign_in(AuthProvider::Apple);
    state.sign_in(AuthProvider::Email);
    assert_eq!(state.provider, Some(AuthProvider::Email));
}

#[test]
fn sign_out_clears_provider() {
    let mut state = SessionState { provider: Some(AuthProvider::Apple) };
    state.sign_out();
    assert!(!state.is_signed_in());
}
