//! Domain services

mod stamper;

pub use stamper::stamp;
