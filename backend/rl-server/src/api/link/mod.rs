pub mod link;
pub mod link_account_query;
pub mod link_account_response;
pub mod linked_profile_dto;
