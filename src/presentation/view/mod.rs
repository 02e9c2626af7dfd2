pub mod status_view;

pub use status_view::render_text;
