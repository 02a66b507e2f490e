pub mod app_category;
pub mod app_link;
pub mod app_status;
pub mod apps;
pub mod build_type;
pub mod catalog_filter;
pub mod catalog_summary;
