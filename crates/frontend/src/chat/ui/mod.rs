mod metrics_sidebar;
mod view;
mod view_model;

pub use view::ChatPage;
