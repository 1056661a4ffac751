pub mod header;
pub mod results_chart;
pub mod snackbar;
pub mod timer_dialog;
