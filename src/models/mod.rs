//! Data models for the image drop demo.
//!
//! This module contains shared data structure definitions used across the
//! application: file candidates and accepted entries, and the static
//! informational copy rendered under the uploader.

pub mod file;
pub mod info;
