pub mod practicum;
pub mod telegram;
pub mod watcher;
