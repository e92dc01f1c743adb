use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use browser_core::{update, BrowserViewModel, Effect, Msg, SessionState};
use browser_logging::{browser_info, browser_warn};
use browser_surface::{HeadlessSurface, PassThroughFilter, SurfaceHandle};

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};

/// One line of terminal input, mapped to its meaning for the session.
enum Input {
    Core(Msg),
    Commit(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    // Keep the terminal for the address bar; logs go to ./browser.log.
    logging::initialize(LogDestination::File);

    let surface = SurfaceHandle::new(Box::new(HeadlessSurface::new(Box::new(PassThroughFilter))));
    let runner = EffectRunner::new(surface);
    let mut state = SessionState::new();

    // First paint: the fixed start page under the session's base policy.
    runner.run(vec![Effect::Render {
        url: state.current_url().to_owned(),
        policy: state.effective_policy(),
    }]);
    render_view(&state.view());

    let (input_tx, input_rx) = mpsc::channel();
    spawn_input_reader(input_tx);

    loop {
        match input_rx.recv_timeout(Duration::from_millis(20)) {
            Ok(Input::Quit) => break,
            Ok(Input::Commit(text)) => {
                // The address bar binding: an edit followed by a submit.
                state = dispatch(state, Msg::InputChanged(text), &runner);
                state = dispatch(state, Msg::AddressSubmitted, &runner);
            }
            Ok(Input::Core(msg)) => {
                state = dispatch(state, msg, &runner);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        for msg in runner.poll_events() {
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            render_view(&state.view());
        }
    }

    browser_info!("browser shell shutting down");
    Ok(())
}

fn dispatch(state: SessionState, msg: Msg, runner: &EffectRunner) -> SessionState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn spawn_input_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let input = parse_line(trimmed);
            let quit = matches!(input, Input::Quit);
            if tx.send(input).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(Input::Quit);
    });
}

/// Plain text commits the address bar; `:`-prefixed lines drive the buttons.
fn parse_line(line: &str) -> Input {
    match line {
        ":quit" | ":q" => Input::Quit,
        ":back" => Input::Core(Msg::BackRequested),
        ":forward" => Input::Core(Msg::ForwardRequested),
        ":reload" => Input::Core(Msg::ReloadRequested),
        ":incognito" => Input::Core(Msg::IncognitoToggled),
        other if other.starts_with(':') => {
            browser_warn!("unknown command {other}");
            Input::Core(Msg::NoOp)
        }
        other => Input::Commit(other.to_owned()),
    }
}

fn render_view(view: &BrowserViewModel) {
    let back = if view.back_enabled { "<" } else { " " };
    let forward = if view.forward_enabled { ">" } else { " " };
    let title = if view.page_title.is_empty() {
        String::new()
    } else {
        format!("  | {}", view.page_title)
    };
    println!("[{back}{forward}] {}{title}", view.address_text);
}

#[cfg(test)]
mod tests {
    use browser_core::Msg;

    use super::{parse_line, Input};

    #[test]
    fn commands_map_to_button_messages() {
        assert!(matches!(parse_line(":back"), Input::Core(Msg::BackRequested)));
        assert!(matches!(
            parse_line(":forward"),
            Input::Core(Msg::ForwardRequested)
        ));
        assert!(matches!(
            parse_line(":reload"),
            Input::Core(Msg::ReloadRequested)
        ));
        assert!(matches!(
            parse_line(":incognito"),
            Input::Core(Msg::IncognitoToggled)
        ));
        assert!(matches!(parse_line(":quit"), Input::Quit));
    }

    #[test]
    fn unknown_command_is_a_no_op() {
        assert!(matches!(parse_line(":frobnicate"), Input::Core(Msg::NoOp)));
    }

    #[test]
    fn plain_text_commits_the_address_bar() {
        let Input::Commit(text) = parse_line("example.com") else {
            panic!("expected a commit");
        };
        assert_eq!(text, "example.com");
    }
}
