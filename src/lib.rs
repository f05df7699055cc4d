//! Chapter-release digest pipeline for MangaDex.
//!
//! Authenticate once, fetch each configured series' recent chapters inside a
//! trailing window, group them by owning series, and sort/format the result
//! for display. Renderers (CLI report, HTML, JSON) consume the pipeline and
//! decide how to surface a missing token or an empty digest.

pub mod config;
pub mod digest;
pub mod error;
pub mod feed;
pub mod logging;
