//! Small widgets shared by the pages.

pub mod load_state;
pub mod popup;
pub mod status_badge;
pub mod text_field;
