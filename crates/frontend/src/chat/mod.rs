pub mod markdown;
pub mod model;
pub mod stream;
pub mod transcript;
pub mod ui;
