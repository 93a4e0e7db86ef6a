pub mod config;
pub mod info;
pub mod locate;
pub mod record;
