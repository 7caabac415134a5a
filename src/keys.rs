use crate::app::App;
use crate::router::Route;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let request = apply_key(&mut guard, key_event);
    drop(guard);

    if let Some(request) = request {
        let _ = network_requests.send(request).await;
    }
}

/// Apply one key press and return the fetch it triggers, if any.
pub fn apply_key(app: &mut App, key_event: KeyEvent) -> Option<NetworkRequest> {
    if app.state.address_bar.editing {
        match key_event.code {
            KeyCode::Enter => return app.submit_address_bar(),
            KeyCode::Esc => app.state.address_bar.cancel(),
            KeyCode::Backspace => {
                app.state.address_bar.input.pop();
            }
            Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                app.state.address_bar.input.push(c)
            }
            Char('c') => quit(),
            _ => {}
        }
        return None;
    }

    let on_home = *app.state.router.current() == Route::Home;

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => quit(),

        // Page switching
        (Char('1'), _) => return app.navigate(Route::Home),
        (Char('2'), _) => return app.navigate(Route::Leaderboard),
        (Char('3'), _) => return app.navigate(Route::HowItWorks),
        (Char('4'), _) => return app.navigate(Route::About),
        (Char('5'), _) => return app.navigate(Route::Contact),
        (Char(':') | Char('/'), _) => app.open_address_bar(),
        (KeyCode::Esc | KeyCode::Backspace, _) => return app.go_back(),
        (Char('r'), _) => return app.reload(),

        // List / table movement
        (Char('j') | KeyCode::Down, _) => app.select_down(),
        (Char('k') | KeyCode::Up, _) => app.select_up(),
        (KeyCode::Enter, _) if on_home => return app.open_selected_match(),

        // Global
        (Char('f'), _) => app.toggle_full_screen(),
        (Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }
    None
}

fn quit() -> ! {
    crate::cleanup_terminal();
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use cricket_api::{LeaderboardSource, Match};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new(AppSettings::default());
        let Some(NetworkRequest::LoadMatches { ticket }) = app.start() else {
            panic!("expected matches request");
        };
        app.on_matches_loaded(
            ticket,
            vec![Match { match_id: "m1".into(), teams: "India vs Australia".into() }],
        );
        app
    }

    #[test]
    fn enter_on_home_opens_match() {
        let mut app = loaded_app();
        let request = apply_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(
            request,
            Some(NetworkRequest::LoadLeaderboard { source: LeaderboardSource::Match(ref id), .. }) if id == "m1"
        ));
    }

    #[test]
    fn number_keys_switch_pages() {
        let mut app = loaded_app();
        assert!(apply_key(&mut app, press(Char('4'))).is_none());
        assert_eq!(app.state.router.current(), &Route::About);
        assert!(matches!(
            apply_key(&mut app, press(Char('2'))),
            Some(NetworkRequest::LoadLeaderboard { source: LeaderboardSource::Default, .. })
        ));
    }

    #[test]
    fn escape_goes_back() {
        let mut app = loaded_app();
        apply_key(&mut app, press(Char('5')));
        assert!(matches!(
            apply_key(&mut app, press(KeyCode::Esc)),
            Some(NetworkRequest::LoadMatches { .. })
        ));
        assert_eq!(app.state.router.current(), &Route::Home);
    }

    #[test]
    fn typed_path_is_entered_through_the_address_bar() {
        let mut app = loaded_app();
        apply_key(&mut app, press(Char(':')));
        assert!(app.state.address_bar.editing);
        // Bar opens with the current path ("/"); replace it.
        apply_key(&mut app, press(KeyCode::Backspace));
        for c in "/how-it-works".chars() {
            apply_key(&mut app, press(Char(c)));
        }
        assert!(apply_key(&mut app, press(KeyCode::Enter)).is_none());
        assert_eq!(app.state.router.current(), &Route::HowItWorks);
        assert!(!app.state.address_bar.editing);
    }

    #[test]
    fn number_keys_type_while_editing() {
        let mut app = loaded_app();
        apply_key(&mut app, press(Char(':')));
        apply_key(&mut app, press(Char('2')));
        assert_eq!(app.state.router.current(), &Route::Home);
        assert_eq!(app.state.address_bar.input, "/2");
        apply_key(&mut app, press(KeyCode::Esc));
        assert!(!app.state.address_bar.editing);
    }
}
