pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod views;

pub use error::LinkPageError;
pub use router::{LinkPageState, linkpage_router};
