pub mod nav;
pub mod rare_popup;
pub mod report_panel;
