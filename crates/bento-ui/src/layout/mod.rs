//! Grid layout descriptors
//!
//! A [`GridLayout`] describes the track template of a bento grid: how many
//! columns exist at each breakpoint, how tall the implicit rows are, and the
//! gap between cells. Cards describe their own footprint with a [`Span`].

mod breakpoint;
mod placement;
mod responsive;

pub use breakpoint::Breakpoint;
pub use placement::{place, Placement};
pub use responsive::{Responsive, Span};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Sizing of implicitly created rows
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowSizing {
    /// Rows grow with their content
    #[default]
    Auto,
    /// Every row is exactly this many pixels tall
    Fixed(u16),
    /// Rows are at least this many pixels tall and grow with content
    AtLeast(u16),
}

impl RowSizing {
    /// The `auto-rows-*` class, `None` for content-sized rows
    pub fn class(&self) -> Option<String> {
        match self {
            RowSizing::Auto => None,
            RowSizing::Fixed(px) => Some(format!("auto-rows-[{px}px]")),
            RowSizing::AtLeast(px) => Some(format!("auto-rows-[minmax({px}px,auto)]")),
        }
    }
}

/// Track template of a bento grid
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: Responsive<u8>,
    #[serde(default)]
    pub rows: RowSizing,
    #[serde(default = "default_gap")]
    pub gap: Responsive<u8>,
}

fn default_gap() -> Responsive<u8> {
    Responsive::new(4)
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Responsive::new(1))
    }
}

impl GridLayout {
    /// Grid with the given column tracks, content-sized rows and a gap of 4
    pub fn new(columns: Responsive<u8>) -> Self {
        Self {
            columns,
            rows: RowSizing::Auto,
            gap: default_gap(),
        }
    }

    pub fn with_rows(mut self, rows: RowSizing) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_gap(mut self, gap: Responsive<u8>) -> Self {
        self.gap = gap;
        self
    }

    pub fn columns_at(&self, bp: Breakpoint) -> u8 {
        self.columns.at(bp)
    }

    pub fn gap_at(&self, bp: Breakpoint) -> u8 {
        self.gap.at(bp)
    }

    /// Utility classes for gap, columns and rows (without the `grid` itself)
    pub fn class(&self) -> String {
        let mut classes = self.gap.classes("gap", None);
        classes.extend(self.columns.classes("grid-cols", None));
        classes.extend(self.rows.class());
        classes.join(" ")
    }

    /// Rejects layouts that resolve to zero columns at any breakpoint
    pub fn validate(&self) -> Result<()> {
        match Breakpoint::ALL
            .iter()
            .find(|bp| self.columns.at(**bp) == 0)
        {
            Some(bp) => Err(LayoutError::ZeroColumns { breakpoint: *bp }),
            None => Ok(()),
        }
    }

    /// Where each card lands at `bp`, in document order
    pub fn place(&self, spans: &[Span], bp: Breakpoint) -> Vec<Placement> {
        let resolved: Vec<(u8, u8)> = spans.iter().map(|s| s.at(bp)).collect();
        place(self.columns_at(bp), &resolved)
    }
}
