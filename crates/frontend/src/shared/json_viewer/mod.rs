mod widget;

pub use widget::{pretty_json, JsonViewer};
