pub mod client;

pub use client::LoadTestClient;
