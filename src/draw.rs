use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::leaderboard::LeaderboardTable;
use crate::components::match_list::MatchList;
use crate::components::pages::{not_found_body, page_body};
use crate::router::Route;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use cricket_api::LeaderboardSource;

static TABS: &[&str; 5] = &["Home", "Leaderboard", "How It Works", "About", "Contact"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.router.current() {
            Route::Home => draw_matches(f, layout.main, app),
            Route::Leaderboard | Route::Match { .. } => draw_leaderboard(f, layout.main, app),
            Route::NotFound { path } => {
                draw_page(f, layout.main, " Not Found ", &not_found_body(path), Color::Red)
            }
            route => {
                let title = format!(" {} ", route.title());
                draw_page(f, layout.main, &title, page_body(route).unwrap_or_default(), Color::Blue)
            }
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
        draw_status_line(f, layout.status, app);
        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn tab_index(route: &Route) -> usize {
    match route {
        Route::Home | Route::Match { .. } | Route::NotFound { .. } => 0,
        Route::Leaderboard => 1,
        Route::HowItWorks => 2,
        Route::About => 3,
        Route::Contact => 4,
    }
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let titles: Vec<Line> = TABS
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {t}", i + 1)))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Horoscope Cricket ")
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )
        .select(tab_index(app.state.router.current()))
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("q quit ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_matches(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::Blue).title(" 🏏 Today's Matches ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [key_legend, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new("Keys: j/k=move  Enter=leaderboard  r=reload  :=go to path")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let matches = &app.state.matches;
    f.render_widget(
        MatchList {
            matches: matches.slot.records(),
            selected: matches.selected,
            status: matches.slot.status(),
        },
        content,
    );
}

fn draw_leaderboard(f: &mut Frame, area: Rect, app: &App) {
    let Some(leaderboard) = app.state.active_leaderboard() else {
        return;
    };
    let source = leaderboard.slot.key().cloned().unwrap_or_default();

    let (title, accent) = match &source {
        LeaderboardSource::Default => (" 🏏 Today's Horoscope Leaderboard ".to_string(), Color::Blue),
        LeaderboardSource::Match(id) => (format!(" Horoscope Leaderboard · match {id} "), Color::Green),
    };
    let block = default_border(accent).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [key_legend, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new("Keys: j/k=scroll  Esc=back  r=reload  1=matches")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    f.render_widget(
        LeaderboardTable {
            rankings: leaderboard.slot.records(),
            column: source.score_column(),
            status: leaderboard.slot.status(),
            scroll_offset: leaderboard.scroll_offset,
            accent,
        },
        content,
    );
}

fn draw_page(f: &mut Frame, area: Rect, title: &str, body: &str, color: Color) {
    let block = default_border(color).title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, text_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new(body.to_string())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(widget, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.address_bar.editing {
        Line::from(vec![
            Span::styled(" go to ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::styled(
                format!(" {}_", app.state.address_bar.input),
                Style::default().fg(Color::Yellow),
            ),
        ])
    } else {
        let loaded_at = match app.state.router.current() {
            Route::Home => app.state.matches.slot.loaded_at(),
            _ => app
                .state
                .active_leaderboard()
                .and_then(|view| view.slot.loaded_at()),
        };
        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.state.router.current()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", app.settings.data_source),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(at) = loaded_at {
            spans.push(Span::styled(
                format!(" loaded {at}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if app.state.router.can_go_back() {
            spans.push(Span::styled("  Esc back", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
