pub mod config;
pub mod dispatch;
pub mod interactive;
pub mod lookup;
