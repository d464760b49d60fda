//! Per-breakpoint values and card spans

use serde::{Deserialize, Serialize};

use super::Breakpoint;

/// A value that may change at each breakpoint.
///
/// Unset breakpoints inherit from the nearest narrower one that is set,
/// falling back to `base`.
///
/// # Example
///
/// ```rust
/// use bento_ui::{Breakpoint, Responsive};
///
/// let cols = Responsive::new(1).sm(2).lg(4);
/// assert_eq!(cols.at(Breakpoint::Md), 2);
/// assert_eq!(cols.at(Breakpoint::Xl), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Responsive<T> {
    base: T,
    overrides: [Option<T>; 4],
}

impl<T: Copy> Responsive<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: [None; 4],
        }
    }

    pub fn sm(self, value: T) -> Self {
        self.set(Breakpoint::Sm, value)
    }

    pub fn md(self, value: T) -> Self {
        self.set(Breakpoint::Md, value)
    }

    pub fn lg(self, value: T) -> Self {
        self.set(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.set(Breakpoint::Xl, value)
    }

    /// Sets the value at `bp` (setting `Base` replaces the base value)
    pub fn set(mut self, bp: Breakpoint, value: T) -> Self {
        match bp {
            Breakpoint::Base => self.base = value,
            other => self.overrides[other.index() - 1] = Some(value),
        }
        self
    }

    pub fn base(&self) -> T {
        self.base
    }

    /// Resolves the value in effect at `bp`
    pub fn at(&self, bp: Breakpoint) -> T {
        self.overrides[..bp.index()]
            .iter()
            .rev()
            .find_map(|v| *v)
            .unwrap_or(self.base)
    }

    /// Breakpoints that were set explicitly, narrowest first
    pub fn overrides(&self) -> impl Iterator<Item = (Breakpoint, T)> + '_ {
        Breakpoint::ALL[1..]
            .iter()
            .zip(self.overrides.iter())
            .filter_map(|(bp, v)| v.map(|v| (*bp, v)))
    }
}

impl<T: Copy + std::fmt::Display + PartialEq> Responsive<T> {
    /// Utility classes for `stem` (e.g. `grid-cols`), one per set breakpoint.
    ///
    /// The base class is left out when it equals `implicit_base`, since the
    /// host already behaves that way without a class.
    pub fn classes(&self, stem: &str, implicit_base: Option<T>) -> Vec<String> {
        let mut out = Vec::new();
        if implicit_base != Some(self.base) {
            out.push(format!("{stem}-{}", self.base));
        }
        for (bp, value) in self.overrides() {
            out.push(format!("{}{stem}-{value}", bp.prefix()));
        }
        out
    }
}

impl<T: Copy + Default> Default for Responsive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// How many column and row tracks a card occupies at each breakpoint.
///
/// The default is one track in each direction everywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Span {
    pub cols: Responsive<u8>,
    pub rows: Responsive<u8>,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            cols: Responsive::new(1),
            rows: Responsive::new(1),
        }
    }
}

impl Span {
    /// Column spans per breakpoint, single row everywhere
    pub fn cols(cols: Responsive<u8>) -> Self {
        Self {
            cols,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: Responsive<u8>) -> Self {
        self.rows = rows;
        self
    }

    /// `(col_span, row_span)` at `bp`
    pub fn at(&self, bp: Breakpoint) -> (u8, u8) {
        (self.cols.at(bp), self.rows.at(bp))
    }

    /// Span classes, e.g. `sm:col-span-2 lg:col-span-3 lg:row-span-2`
    pub fn class(&self) -> String {
        let mut classes = self.cols.classes("col-span", Some(1));
        classes.extend(self.rows.classes("row-span", Some(1)));
        classes.join(" ")
    }
}
