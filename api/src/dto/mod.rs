//! Request and response bodies

pub mod error_dto;
pub mod verification_dto;

pub use error_dto::ErrorResponse;
pub use verification_dto::{
    RequestCodeRequest, RequestCodeResponse, VerifyCodeRequest, VerifyCodeResponse,
};
