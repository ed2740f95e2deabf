#![allow(clippy::implicit_hasher)]

pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{Result, SubwayError};
