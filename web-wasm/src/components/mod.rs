pub mod header;
pub mod import_dialog;
pub mod preview_table;
pub mod progress_bar;
pub mod result_report;
pub mod settings_panel;
pub mod upload_area;
