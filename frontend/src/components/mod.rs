pub mod banner;
pub mod certificates;
pub mod gallery;
pub mod nav;
pub mod page_header;
pub mod tribute;
pub mod yearbook;
