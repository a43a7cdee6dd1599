pub mod api;
pub mod audio;
pub mod logging;
pub mod storage;
