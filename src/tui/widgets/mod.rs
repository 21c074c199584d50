pub mod confirm_delete;
pub mod entry_table;
pub mod form;
pub mod help;
pub mod input;
pub mod status_bar;
