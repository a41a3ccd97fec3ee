mod client;

pub use client::{GladosClient, CHECK_IN_PATH, STATUS_PATH, USER_AGENTS};
