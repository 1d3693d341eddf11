pub mod pricing;
pub mod requests;
pub mod responses;
