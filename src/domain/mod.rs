pub mod errors;
pub mod fingerprint;
pub mod payment_status;
pub mod qr;
pub mod qr_generator;
pub mod transport;
