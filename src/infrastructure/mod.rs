pub mod http;
pub mod khqr;
