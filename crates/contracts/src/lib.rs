//! Shared data contracts between the report frontend and the hosted
//! reporting API. Pure data: serde DTOs plus the filter / envelope
//! helpers that both the fetch layer and the tests exercise.

pub mod reports;
pub mod shared;
