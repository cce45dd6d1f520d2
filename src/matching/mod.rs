mod client;
mod types;

pub use client::{MatchClient, MatchService};
pub use types::{MatchResult, ResumeFile};
