use std::sync::Once;

use browser_core::{update, ContentPolicy, Effect, Msg, SearchEngine, SessionState, INITIAL_URL};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(browser_logging::initialize_for_tests);
}

fn submit_address(state: SessionState, input: &str) -> (SessionState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::AddressSubmitted)
}

#[test]
fn initial_state_shows_decorated_start_page() {
    init_logging();
    let state = SessionState::new();
    let view = state.view();

    assert_eq!(state.current_url(), INITIAL_URL);
    assert_eq!(view.address_text, "\u{1F512} google.com");
    assert_eq!(view.page_title, "");
    assert!(!view.back_enabled);
    assert!(!view.forward_enabled);
    assert!(!view.incognito);
}

#[test]
fn commit_resolves_prefixes_and_decorates() {
    init_logging();
    let (mut state, effects) = submit_address(SessionState::new(), "example.com");

    assert_eq!(state.current_url(), "https://example.com");
    assert_eq!(state.view().address_text, "\u{1F512} example.com");
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::Render {
            url: "https://example.com".to_string(),
            policy: state.effective_policy(),
        }]
    );
}

#[test]
fn commit_clears_pending_edit_state() {
    init_logging();
    let (state, _effects) = submit_address(SessionState::new(), "example.com/deep/path");

    // The input field backing reverts to the resolved URL, not the raw edit.
    assert_eq!(state.input_text(), "https://example.com/deep/path");
    // The display keeps only the host.
    assert_eq!(state.view().address_text, "\u{1F512} example.com");
}

#[test]
fn commit_of_query_uses_default_search_engine() {
    init_logging();
    let (state, effects) = submit_address(SessionState::new(), "hello world");

    assert_eq!(
        state.current_url(),
        "https://www.google.com/search?q=hello%20world"
    );
    assert_eq!(state.view().address_text, "\u{1F512} google.com");
    assert_eq!(effects.len(), 1);
}

#[test]
fn configured_search_engine_is_honoured() {
    init_logging();
    let config = ContentPolicy {
        default_search_engine: SearchEngine::Bing,
        ..ContentPolicy::default()
    };
    let (state, _effects) = submit_address(SessionState::with_config(config), "hello world");

    assert_eq!(
        state.current_url(),
        "https://www.bing.com/search?q=hello%20world"
    );
}

#[test]
fn insecure_commit_is_labelled_not_secure() {
    init_logging();
    let (state, _effects) = submit_address(SessionState::new(), "http://example.com/login");

    assert_eq!(state.view().address_text, "Not secure - example.com");
}

#[test]
fn first_matching_strip_rule_wins_on_commit() {
    init_logging();
    let (state, _effects) = submit_address(SessionState::new(), "http://www.example.com");

    // Stripped by the `http://www.` rule alone, not by `http://` then `www.`.
    assert_eq!(state.view().address_text, "Not secure - example.com");
}

#[test]
fn editing_shows_raw_text_without_decoration() {
    init_logging();
    let (state, effects) = update(SessionState::new(), Msg::IncognitoToggled);
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(state, Msg::InputChanged("typing...".to_string()));
    assert!(effects.is_empty());
    // No lock badge, no privacy badge while editing, even in incognito.
    assert_eq!(state.view().address_text, "typing...");
}

#[test]
fn incognito_commit_stacks_private_over_lock_badge() {
    init_logging();
    let (state, _effects) = update(SessionState::new(), Msg::IncognitoToggled);
    let (state, _effects) = submit_address(state, "example.com");

    assert_eq!(
        state.view().address_text,
        "Private - \u{1F512} example.com"
    );
}

#[test]
fn incognito_toggle_replaces_display_and_forces_reload() {
    init_logging();
    let (state, _effects) = submit_address(SessionState::new(), "example.com");

    let (state, effects) = update(state, Msg::IncognitoToggled);
    assert!(state.incognito());
    // The placeholder replaces the previously resolved URL display.
    assert_eq!(state.view().address_text, "Private - Enter Address");
    assert_eq!(
        effects,
        vec![Effect::Reload {
            policy: state.effective_policy(),
        }]
    );
    match &effects[0] {
        Effect::Reload { policy } => {
            assert!(!policy.allow_storage);
            assert!(!policy.allow_cookies);
            assert!(!policy.allow_location);
            assert!(!policy.allow_caching);
            assert!(policy.allow_javascript);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn double_toggle_restores_placeholder_and_base_config() {
    init_logging();
    let state = SessionState::new();
    let baseline = state.base_config().clone();

    let (state, _effects) = update(state, Msg::IncognitoToggled);
    let (state, _effects) = update(state, Msg::IncognitoToggled);

    assert!(!state.incognito());
    assert_eq!(state.view().address_text, "Enter Address");
    assert_eq!(state.base_config(), &baseline);
}

#[test]
fn empty_submit_is_dropped() {
    init_logging();
    let (state, _) = update(SessionState::new(), Msg::InputChanged(String::new()));
    let (state, effects) = update(state, Msg::AddressSubmitted);

    assert!(effects.is_empty());
    // Nothing was resolved; the last navigable URL is untouched.
    assert_eq!(state.current_url(), INITIAL_URL);
}
