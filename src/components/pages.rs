use crate::router::Route;

/// Body text of the informational pages. `None` for data views.
pub fn page_body(route: &Route) -> Option<&'static str> {
    match route {
        Route::About => Some(
            "Horoscope Cricket ranks today's cricketers by what the stars say about \
             their career outlook. It is a bit of fun, not betting advice.",
        ),
        Route::HowItWorks => Some(
            "We analyze players' zodiac signs and rank their career outlook for the day \
             using AI-powered astrology. Every morning a job collects today's squads and \
             dates of birth, works out each player's sign and asks a language model to \
             order the signs. Purely for fun!",
        ),
        Route::Contact => Some("You can reach us at contact@horoscopecricket.com"),
        _ => None,
    }
}

pub fn not_found_body(path: &str) -> String {
    format!("Nothing lives at {path}.\n\nPress 1 for today's matches or Esc to go back.")
}
