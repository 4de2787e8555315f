pub mod errors;
pub mod html;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use errors::html_error_response;
pub use html::{
    clear_session_cookie, html_response, html_response_with_status, redirect_response,
    session_cookie,
};
