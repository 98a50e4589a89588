pub mod api_utils;
pub mod components;
pub mod http;
pub mod icons;
pub mod json_viewer;
pub mod list_utils;
pub mod live;
pub mod poll;
pub mod storage;
