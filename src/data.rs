pub mod field_errors;
pub mod page;
pub mod sort_order;
pub mod student;
