pub mod conf;
pub mod upload;
