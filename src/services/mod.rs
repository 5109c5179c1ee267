pub mod http_helpers;
pub mod listing;
pub mod question_service;
pub mod quiz_service;
pub mod quiz_session_service;
