pub mod emv_khqr_generator;
mod tlv;
