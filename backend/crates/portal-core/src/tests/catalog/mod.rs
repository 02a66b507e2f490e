mod catalog_filter;
mod catalog_summary;
