// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Visibility state for UI sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionVisibility {
    pub files: bool,
    pub details: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            files: true,
            details: true,
        }
    }
}

impl SectionVisibility {
    /// Toggle a section by number (1-2).
    pub fn toggle(&mut self, section: usize) {
        match section {
            1 => self.files = !self.files,
            2 => self.details = !self.details,
            _ => {}
        }
    }
}

/// A toggleable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Files,
    Details,
}

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Column areas, in the same order as `section_order`
    pub columns: Vec<Rect>,
    pub section_order: Vec<Section>,
    /// One-line status bar at the bottom
    pub status_area: Rect,
}

impl ComputedLayout {
    /// Visible sections paired with their areas.
    pub fn sections(&self) -> Vec<(Section, Rect)> {
        self.section_order
            .iter()
            .copied()
            .zip(self.columns.iter().copied())
            .collect()
    }
}

/// Compute the layout based on total area and section visibility.
pub fn compute_layout(area: Rect, visibility: &SectionVisibility) -> ComputedLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let (main_area, status_area) = (vertical[0], vertical[1]);

    // Build column weights dynamically based on visible sections
    let mut section_order = Vec::new();
    let mut weights = Vec::new();

    if visibility.files {
        section_order.push(Section::Files);
        weights.push(60u16);
    }
    if visibility.details {
        section_order.push(Section::Details);
        weights.push(40u16);
    }

    let columns: Vec<Rect> = if !weights.is_empty() {
        let sum: u16 = weights.iter().copied().sum();
        let constraints: Vec<Constraint> = weights
            .into_iter()
            .map(|w| Constraint::Percentage((w as u32 * 100 / sum as u32) as u16))
            .collect();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(main_area)
            .iter()
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    ComputedLayout {
        columns,
        section_order,
        status_area,
    }
}
