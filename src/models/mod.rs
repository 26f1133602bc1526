// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod course;
pub mod user;

pub use course::{Course, CourseFields, CreateCourseRequest};
pub use user::Credentials;
