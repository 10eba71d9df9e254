//! Reusable HTML components
//!
//! Maud component functions for the blogroll list, the administrative
//! settings page and the standalone preview document.

pub mod layout;
pub mod link;
pub mod settings_page;
