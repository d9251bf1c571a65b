pub mod sortable_header_cell;
pub mod table_checkbox;
