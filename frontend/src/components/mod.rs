//! Reusable components live here.

pub mod header;
pub mod scroll_to_top_button;
pub mod share_menu;
pub mod theme_select;
