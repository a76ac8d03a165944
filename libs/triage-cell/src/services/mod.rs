pub mod advice;
pub mod questions;
pub mod scoring;
pub mod session;
