pub mod app_list_response;
pub mod apps;
pub mod list_apps_query;
