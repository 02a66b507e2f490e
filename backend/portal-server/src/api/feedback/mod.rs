pub mod add_response_request;
pub mod add_response_response;
pub mod create_feedback_request;
pub mod feedback;
pub mod feedback_dto;
pub mod feedback_item_response;
pub mod feedback_list_response;
pub mod list_feedback_query;
pub mod response_dto;
pub mod update_feedback_request;
