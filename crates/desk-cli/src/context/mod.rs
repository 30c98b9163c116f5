mod app_context;

pub use app_context::{AppContext, into_anyhow};
