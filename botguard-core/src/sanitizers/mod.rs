//! Text transforms applied to untrusted fields before they reach shell commands,
//! git operations, API calls or logs.
//!
//! Each submodule is a set of independent, total functions. Absent input (`None`)
//! is always returned as absent; none of these functions read process state.
//! The character classes and term lists they share live in [`patterns`].

pub mod command;
pub mod environment;
pub mod identity;
pub mod labels;
pub mod markdown;
pub mod patterns;
