//! Infrastructure layer - backend access

pub mod storage;
