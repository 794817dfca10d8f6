pub mod compute_field;
pub mod partition_rows;
