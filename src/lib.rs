pub mod config;
pub mod connection;
pub mod cost;
pub mod error;
pub mod server;
pub mod session;
pub mod ui;

pub use config::{AppConfig, SessionConfig, ViewMode};
pub use connection::{ConnectionState, ConnectionToggle};
pub use cost::CostEstimate;
pub use error::{Result, VaaniError};
pub use session::{HttpSessionTransport, SessionHandle, SessionRunner, SessionTransport};
