use crate::state::app_state::LoadStatus;
use cricket_api::{PlayerRanking, ScoreColumn};
use tui::buffer::Buffer;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Cell, Paragraph, Row, Table, Widget};

pub const LOADING_RANKINGS: &str = "Loading leaderboard...";
pub const NO_RANKINGS: &str = "No rankings available";
pub const FAILED_RANKINGS: &str = "Failed to load leaderboard";

/// Fixed column labels; the last follows the document's score field.
pub fn header_labels(column: ScoreColumn) -> [&'static str; 5] {
    ["Player", "Team", "Zodiac", "DOB", column.label()]
}

pub fn ranking_cells(ranking: &PlayerRanking) -> [String; 5] {
    [
        ranking.player.clone(),
        ranking.team.clone(),
        ranking.zodiac.clone(),
        ranking.dob.clone(),
        ranking.score_label(),
    ]
}

/// Status line shown under an empty table body.
pub fn empty_body_message(status: &LoadStatus) -> &'static str {
    match status {
        LoadStatus::Loading => LOADING_RANKINGS,
        LoadStatus::Failed(_) => FAILED_RANKINGS,
        LoadStatus::Idle | LoadStatus::Loaded => NO_RANKINGS,
    }
}

/// Player ranking table. Rows keep document order; nothing is sorted.
pub struct LeaderboardTable<'a> {
    pub rankings: &'a [PlayerRanking],
    pub column: ScoreColumn,
    pub status: &'a LoadStatus,
    pub scroll_offset: usize,
    pub accent: Color,
}

impl Widget for LeaderboardTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(header_labels(self.column).map(Cell::from))
            .style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows = self
            .rankings
            .iter()
            .skip(self.scroll_offset)
            .map(|ranking| {
                let [player, team, zodiac, dob, score] = ranking_cells(ranking);
                Row::new(vec![
                    Cell::from(player),
                    Cell::from(team),
                    Cell::from(zodiac),
                    Cell::from(dob),
                    Cell::from(Line::from(score).alignment(Alignment::Center))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                ])
            });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(18),
            ],
        )
        .header(header)
        .column_spacing(1);

        if !self.rankings.is_empty() {
            table.render(area, buf);
            return;
        }

        // Header, margin, then the status line in place of the body.
        let [table_area, message_area, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        table.render(table_area, buf);
        Paragraph::new(empty_body_message(self.status))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(message_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_to_lines;
    use cricket_api::Score;

    fn ranking(player: &str, score: Option<Score>) -> PlayerRanking {
        PlayerRanking {
            player: player.to_string(),
            team: "T".into(),
            zodiac: "Leo".into(),
            dob: "1990-01-01".into(),
            score,
        }
    }

    fn table<'a>(rankings: &'a [PlayerRanking], status: &'a LoadStatus) -> LeaderboardTable<'a> {
        LeaderboardTable {
            rankings,
            column: ScoreColumn::PredictionScale,
            status,
            scroll_offset: 0,
            accent: Color::Green,
        }
    }

    #[test]
    fn missing_score_cell_is_exactly_placeholder() {
        let cells = ranking_cells(&ranking("A", None));
        assert_eq!(cells, ["A", "T", "Leo", "1990-01-01", "N/A"].map(String::from));
    }

    #[test]
    fn header_names_the_score_field() {
        assert_eq!(header_labels(ScoreColumn::Rating)[4], "Rating");
        assert_eq!(header_labels(ScoreColumn::PredictionScale)[4], "Prediction Scale");
        assert_eq!(header_labels(ScoreColumn::Rating)[..4], ["Player", "Team", "Zodiac", "DOB"]);
    }

    #[test]
    fn renders_one_row_per_record_in_document_order() {
        let rankings = vec![
            ranking("Zed", Some(Score::Number(3.0))),
            ranking("Amy", None),
            ranking("Kim", Some(Score::Number(12.0))),
        ];
        let lines = render_to_lines(table(&rankings, &LoadStatus::Loaded), 80, 8);

        assert!(lines[0].contains("Player") && lines[0].contains("Prediction Scale"));
        let body: Vec<&String> = lines.iter().filter(|l| l.contains("Leo")).collect();
        assert_eq!(body.len(), 3);
        assert!(body[0].starts_with("Zed") && body[0].contains('3'));
        assert!(body[1].starts_with("Amy") && body[1].contains("N/A"));
        assert!(body[2].starts_with("Kim") && body[2].contains("12"));
    }

    #[test]
    fn scroll_offset_skips_leading_rows() {
        let rankings = vec![ranking("First", None), ranking("Second", None)];
        let mut widget = table(&rankings, &LoadStatus::Loaded);
        widget.scroll_offset = 1;
        let lines = render_to_lines(widget, 80, 6);
        assert!(!lines.iter().any(|l| l.contains("First")));
        assert!(lines.iter().any(|l| l.contains("Second")));
    }

    #[test]
    fn empty_body_keeps_header_and_adds_status() {
        let lines = render_to_lines(table(&[], &LoadStatus::Loaded), 80, 6);
        assert!(lines[0].contains("Player"));
        assert!(!lines.iter().any(|l| l.contains("Leo")));
        assert!(lines.iter().any(|l| l.contains(NO_RANKINGS)));
    }

    #[test]
    fn empty_body_message_tracks_status() {
        assert_eq!(empty_body_message(&LoadStatus::Loading), LOADING_RANKINGS);
        assert_eq!(empty_body_message(&LoadStatus::Failed("x".into())), FAILED_RANKINGS);
        assert_eq!(empty_body_message(&LoadStatus::Idle), NO_RANKINGS);
    }
}
