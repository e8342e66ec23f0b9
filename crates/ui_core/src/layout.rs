//! Declarative grid placement for a screen.
//!
//! A [`ScreenLayout`] is built once from a list of cell assignments and is
//! immutable afterwards; the rendering backend walks [`ScreenLayout::rows`].

use serde::{Deserialize, Serialize};
use shared::{
    domain::{HorizontalAlign, WidgetId},
    error::StyleError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top of the cell, horizontally centered.
    North,
    Center,
    /// Leading (left) edge of the cell.
    Start,
    /// Trailing (right) edge of the cell.
    End,
}

impl Anchor {
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Anchor::North | Anchor::Center => HorizontalAlign::Center,
            Anchor::Start => HorizontalAlign::Left,
            Anchor::End => HorizontalAlign::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
    pub row_span: u32,
    pub col_span: u32,
    pub anchor: Anchor,
    #[serde(default)]
    pub insets: Insets,
}

impl GridCell {
    pub fn at(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            col_span: 1,
            anchor: Anchor::Center,
            insets: Insets::default(),
        }
    }

    pub fn spanning(mut self, col_span: u32) -> Self {
        self.col_span = col_span.max(1);
        self
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn inset(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    fn last_row(&self) -> u32 {
        self.row + self.row_span.max(1) - 1
    }

    fn last_column(&self) -> u32 {
        self.column + self.col_span.max(1) - 1
    }

    pub fn overlaps(&self, other: &GridCell) -> bool {
        self.row <= other.last_row()
            && other.row <= self.last_row()
            && self.column <= other.last_column()
            && other.column <= self.last_column()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub widget: WidgetId,
    pub cell: GridCell,
}

/// Entries sharing a top row, ordered by column.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow<'a> {
    pub index: u32,
    pub entries: Vec<&'a LayoutEntry>,
}

impl LayoutRow<'_> {
    pub fn max_insets(&self) -> Insets {
        self.entries.iter().fold(Insets::default(), |acc, e| Insets {
            top: acc.top.max(e.cell.insets.top),
            left: acc.left.max(e.cell.insets.left),
            bottom: acc.bottom.max(e.cell.insets.bottom),
            right: acc.right.max(e.cell.insets.right),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenLayout {
    entries: Vec<LayoutEntry>,
}

impl ScreenLayout {
    /// Validates that no two cells overlap and that no widget is placed twice.
    pub fn new(entries: Vec<LayoutEntry>) -> Result<Self, StyleError> {
        for (idx, first) in entries.iter().enumerate() {
            for second in &entries[idx + 1..] {
                if first.widget == second.widget || first.cell.overlaps(&second.cell) {
                    return Err(StyleError::LayoutOverlap {
                        first: first.widget.0,
                        second: second.widget.0,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn cell_of(&self, widget: WidgetId) -> Option<&GridCell> {
        self.entries
            .iter()
            .find(|e| e.widget == widget)
            .map(|e| &e.cell)
    }

    pub fn column_count(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.cell.last_column() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn row_count(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.cell.last_row() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> Vec<LayoutRow<'_>> {
        let mut rows: Vec<LayoutRow<'_>> = Vec::new();
        for row in 0..self.row_count() {
            let mut entries: Vec<&LayoutEntry> =
                self.entries.iter().filter(|e| e.cell.row == row).collect();
            if entries.is_empty() {
                continue;
            }
            entries.sort_by_key(|e| e.cell.column);
            rows.push(LayoutRow {
                index: row,
                entries,
            });
        }
        rows
    }

    /// True when the entry covers every column of the grid.
    pub fn spans_full_width(&self, entry: &LayoutEntry) -> bool {
        entry.cell.column == 0 && entry.cell.col_span >= self.column_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, cell: GridCell) -> LayoutEntry {
        LayoutEntry {
            widget: WidgetId(id),
            cell,
        }
    }

    #[test]
    fn rejects_overlapping_cells() {
        let err = ScreenLayout::new(vec![
            entry(1, GridCell::at(0, 0).spanning(2)),
            entry(2, GridCell::at(0, 1)),
        ])
        .unwrap_err();
        assert_eq!(err, StyleError::LayoutOverlap { first: 1, second: 2 });
    }

    #[test]
    fn rejects_duplicate_widget() {
        assert!(ScreenLayout::new(vec![
            entry(1, GridCell::at(0, 0)),
            entry(1, GridCell::at(1, 0)),
        ])
        .is_err());
    }

    #[test]
    fn rows_are_ordered_by_row_then_column() {
        let layout = ScreenLayout::new(vec![
            entry(3, GridCell::at(1, 1)),
            entry(1, GridCell::at(0, 0).spanning(2)),
            entry(2, GridCell::at(1, 0)),
        ])
        .expect("layout");
        let rows = layout.rows();
        assert_eq!(rows.len(), 2);
        let second: Vec<u32> = rows[1].entries.iter().map(|e| e.widget.0).collect();
        assert_eq!(second, vec![2, 3]);
        assert_eq!(layout.column_count(), 2);
        assert!(layout.spans_full_width(rows[0].entries[0]));
        assert!(!layout.spans_full_width(rows[1].entries[0]));
    }

    #[test]
    fn anchors_map_to_horizontal_alignment() {
        assert_eq!(Anchor::Start.horizontal(), HorizontalAlign::Left);
        assert_eq!(Anchor::End.horizontal(), HorizontalAlign::Right);
        assert_eq!(Anchor::North.horizontal(), HorizontalAlign::Center);
    }
}
