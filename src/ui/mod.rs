pub mod compose_dialog;
pub mod header;
pub mod message_list;
pub mod panels;
pub mod placeholder;
pub mod sidebar;
