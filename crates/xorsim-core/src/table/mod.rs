pub mod count_table;
