//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (home, post,
//! archive, projects, not found). Each page module handles its specific
//! view logic and uses shared components from the components module.

pub mod index;
pub mod not_found;
pub mod post;
pub mod posts;
pub mod projects;
