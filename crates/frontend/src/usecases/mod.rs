pub mod u601_optimize_code;
