use crate::resolver::{self, ResolveError};
use crate::{Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input_text(text);
            Vec::new()
        }
        Msg::AddressSubmitted => {
            let engine = state.base_config().default_search_engine;
            match resolver::resolve(state.input_text(), engine) {
                Ok(url) => {
                    state.commit_navigation(url.clone());
                    vec![Effect::Render {
                        url,
                        policy: state.effective_policy(),
                    }]
                }
                // The UI binding guarantees non-empty input; a stray empty
                // submit is dropped rather than turned into a malformed URL.
                Err(ResolveError::EmptyInput) => Vec::new(),
            }
        }
        Msg::IncognitoToggled => {
            state.toggle_incognito();
            // Privacy flags cannot change on a live page; the surface has to
            // re-render the current page under the new policy.
            vec![Effect::Reload {
                policy: state.effective_policy(),
            }]
        }
        Msg::BackRequested => {
            if state.can_go_back() {
                vec![Effect::GoBack]
            } else {
                Vec::new()
            }
        }
        Msg::ForwardRequested => {
            if state.can_go_forward() {
                vec![Effect::GoForward]
            } else {
                Vec::new()
            }
        }
        Msg::ReloadRequested => {
            vec![Effect::Reload {
                policy: state.effective_policy(),
            }]
        }
        Msg::NavigationChanged {
            can_go_back,
            can_go_forward,
            title,
        } => {
            state.apply_navigation(can_go_back, can_go_forward, title);
            Vec::new()
        }
        // Failures and page messages are logged by the shell; the core keeps
        // no error state and never retries.
        Msg::LoadFailed { .. } | Msg::SurfaceMessage { .. } | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
