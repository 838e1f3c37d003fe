pub mod client;

pub use client::{FcmClient, PushDelivery, build_send_request};
