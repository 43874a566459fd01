pub mod accounts;
pub mod chatbot;
pub mod config;
pub mod connect;
pub mod error;
pub mod form;
pub mod guidance;
pub mod idcard;
pub mod lost_found;
pub mod qr;
pub mod router;
pub mod service;
pub mod state;
pub mod storage;

pub use router::router;
pub use state::{AppState, AppStateInner};
