pub mod config;
pub mod logging;

pub mod extract;
pub mod harvest;
pub mod http;
pub mod image;
pub mod metadata_file;
pub mod storage;
pub mod url_model;
