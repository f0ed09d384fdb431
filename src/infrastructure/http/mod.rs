pub mod bakong_transport;
