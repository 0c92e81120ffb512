//! Intake & Analysis Pipeline — everything between an uploaded document and
//! the final analysis payload.

pub mod extract;
pub mod gate;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod skills;
