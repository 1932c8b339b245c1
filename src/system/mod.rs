//! Event handling for a running watchface

pub mod app;
pub mod time;

pub use app::WatchApp;
