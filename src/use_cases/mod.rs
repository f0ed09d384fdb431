pub mod check_payment;
pub mod create_qr;
pub mod dto;
pub mod forward_bakong_request;
pub mod normalize_status;
