pub mod leaderboard;
pub mod match_list;
pub mod pages;

/// Render `widget` into a fresh buffer and return its rows as text.
#[cfg(test)]
pub(crate) fn render_to_lines(widget: impl tui::widgets::Widget, width: u16, height: u16) -> Vec<String> {
    use tui::buffer::Buffer;
    use tui::layout::Rect;

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    (0..height)
        .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect()
}
