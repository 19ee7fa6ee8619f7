pub(crate) mod client;
pub(crate) mod middleware;
pub(crate) mod payloads;
pub(crate) mod request;
pub(crate) mod request_log;
pub(crate) mod session_augmenter;
pub(crate) mod session_expiry_guard;
