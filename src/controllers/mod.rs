pub mod deploy;
pub mod export;
pub mod request;
pub mod response;
pub mod validate;
