//! Data models for the Google Gemini API.
//!
//! This module contains the type definitions for the request/response bodies
//! of the public `generateContent` endpoint (`gemini`).

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};
