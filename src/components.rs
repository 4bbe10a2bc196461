//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across page
//! types (home, post, archive, projects, not found). Components render
//! one UI element each so pages share markup and styling.

pub mod footer;
pub mod header;
pub mod layout;
pub mod portfolio;
pub mod post_list;
