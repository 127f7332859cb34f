pub mod config_ops;
pub mod judge_ops;
pub mod table_ops;
