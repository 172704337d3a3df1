// src/ui/widgets/file_list.rs
//! File browser list widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::fs::{Entry, FileCategory};
use crate::ui::icons::icon_for;

/// Render the file browser list.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[Entry],
    categories: &[FileCategory],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .zip(categories.iter().copied())
        .map(|(entry, category)| {
            let suffix = if entry.is_dir { "/" } else { "" };
            ListItem::new(format!("{} {}{}", icon_for(entry, category), entry.name, suffix))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
