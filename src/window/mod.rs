//! Page window module
//!
//! Pure computations that decide which page numbers are visible as buttons.
//!
//! # Overview
//!
//! Given the current page, the number of pages and a button budget, the
//! calculator returns a contiguous, inclusive [`PageWindow`]. Everything the
//! navigation region shows (edge markers, prev/next, the numbered buttons) is
//! derived from that window plus the page count, so identical inputs always
//! produce identical navigation.

mod calculator;
mod layout;

pub use calculator::{compute_window, num_pages, offset_for, PageWindow};
pub use layout::{layout, lazy_layout, EdgeMarkers, NavItem};

#[cfg(test)]
mod tests;
