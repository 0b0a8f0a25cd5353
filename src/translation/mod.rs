mod client;

pub use client::{
    SUCCESS_CODE, TranslateError, TranslationClient, TranslationRequest, TranslationResponse,
    parse_response,
};
