mod view;

pub use view::TracesPage;
