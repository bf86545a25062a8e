pub mod header;
pub mod progress_bar;
pub mod progress_dashboard;
pub mod results_display;
pub mod rewards_page;
pub mod scan_section;
pub mod toaster;
