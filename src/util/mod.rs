pub mod logs;
pub mod progress;
