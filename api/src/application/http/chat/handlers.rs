pub mod get_text_response;
pub mod get_text_response_rag;
