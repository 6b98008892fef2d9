use super::*;

#[test]
fn all_lists_apple_google_email_in_order() {
    assert_eq!(AuthProvider::ALL, [AuthProvider::Apple, AuthProvider::Google, AuthProvider::Email]);
}

#[test]
fn labels_read_continue_with_provider() {
    let labels: Vec<&str> = AuthProvider::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Continue with Apple", "Continue with Google", "Continue with Email"]);
}

#[test]
fn label_embeds_name() {
    for provider in AuthProvider::ALL {
        assert!(provider.label().ends_with(provider.name()), "label mismatch for {provider:?}");
    }
}

#[test]
fn display_prints_slug() {
    assert_eq!(AuthProvider::Google.to_string(), "google");
}

#[test]
fn from_str_accepts_slug_case_insensitively() {
    assert_eq!("apple".parse::<AuthProvider>(), Ok(AuthProvider::Apple));
    assert_eq!("  GOOGLE ".parse::<AuthProvider>(), Ok(AuthProvider::Google));
    assert_eq!("Email".parse::<AuthProvider>(), Ok(AuthProvider::Email));
}

#[test]
fn from_str_rejects_unknown_provider() {
    let err = "github".parse::<AuthProvider>().unwrap_err();
    assert_eq!(err, ParseProviderError { input: "github".to_owned() });
    assert_eq!(err.to_string(), "unknown auth provider: \"github\"");
}

#[test]
fn serde_uses_lowercase_slug() {
    assert_eq!(serde_json::to_value(AuthProvider::Email).unwrap(), serde_json::json!("email"));
    let parsed: AuthProvider = serde_json::from_str("\"apple\"").unwrap();
    assert_eq!(parsed, AuthProvider::Apple);
}
