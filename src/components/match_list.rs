use crate::router::Route;
use crate::state::app_state::LoadStatus;
use cricket_api::Match;
use tui::buffer::Buffer;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget};

pub const NO_MATCHES: &str = "⚠ No matches available";
pub const LOADING_MATCHES: &str = "Loading matches...";

/// One navigable entry: the label shown and the detail route it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub label: String,
    pub route: Route,
}

pub fn match_entries(matches: &[Match]) -> Vec<MatchEntry> {
    matches
        .iter()
        .map(|m| MatchEntry {
            label: m.teams.clone(),
            route: Route::Match { match_id: m.match_id.clone() },
        })
        .collect()
}

/// Today's matches, one entry per listing record in document order.
pub struct MatchList<'a> {
    pub matches: &'a [Match],
    pub selected: usize,
    pub status: &'a LoadStatus,
}

impl Widget for MatchList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.matches.is_empty() {
            let (msg, color) = match self.status {
                LoadStatus::Loading => (LOADING_MATCHES, Color::DarkGray),
                _ => (NO_MATCHES, Color::Red),
            };
            Paragraph::new(msg)
                .style(Style::default().fg(color))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = match_entries(self.matches)
            .into_iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::raw(entry.label),
                    Span::styled(
                        format!("  {}", entry.route.path()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
