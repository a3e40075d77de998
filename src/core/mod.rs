pub mod draft;
pub mod format;
pub mod models;
pub mod outbox;
pub mod selection;
pub mod storage;
pub mod threads;
