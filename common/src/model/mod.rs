pub mod category;
pub mod faculty;
pub mod memory;
pub mod paginated;
pub mod student;
