//! Platform-agnostic logic shared by every screen: data shaping, control
//! state, session handling and the small amount of platform glue they need.

pub mod config;
pub mod controls;
pub mod feedback;
pub mod format;
pub mod logging;
pub mod platform;
pub mod readings;
pub mod series;
pub mod session;
pub mod storage;
pub mod time_range;
pub mod timing;
