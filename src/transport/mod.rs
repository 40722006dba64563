pub mod log_line;
