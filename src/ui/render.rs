use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::selector::SelectorState;
use crate::config::Palette;

/// Render one frame of the selector: filter input, skin list, keybind hint.
pub(crate) fn draw(f: &mut Frame, state: &SelectorState<'_>, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let input = Paragraph::new(Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(palette.dim_text)),
        Span::styled(state.input().to_string(), Style::default().fg(palette.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(" Skins "),
    );
    f.render_widget(input, chunks[0]);

    // Width available for a row inside the list borders.
    let row_width = usize::from(chunks[1].width.saturating_sub(4));
    let items: Vec<ListItem> = state
        .visible()
        .map(|skin| {
            let active = state.current_id().is_some_and(|id| id == skin.id());
            let marker = if active { "● " } else { "  " };
            let name = truncate_to_width(&skin.name, row_width.saturating_sub(marker.width()));
            let used = marker.width() + name.width();
            let package = truncate_to_width(
                &skin.package,
                row_width.saturating_sub(used + 3),
            );
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(name, Style::default().fg(palette.text)),
            ];
            if !package.is_empty() {
                spans.push(Span::styled(
                    format!("   {package}"),
                    Style::default().fg(palette.dim_text),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let mut list_state = ListState::default();
    if items.is_empty() {
        list_state.select(None);
    } else {
        list_state.select(Some(state.selected_row()));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let footer = Paragraph::new(Span::styled(
        "Enter apply   Esc cancel   type to filter",
        Style::default().fg(palette.dim_text),
    ));
    f.render_widget(footer, chunks[2]);
}

/// Truncate to a display width, appending an ellipsis when content is cut.
fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let limit = width.saturating_sub(1);
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate_to_width("Nord", 10), "Nord");
        assert_eq!(truncate_to_width("Nord Aurora Deluxe", 8), "Nord Au…");
    }
}
