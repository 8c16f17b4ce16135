//! # jwtview
//!
//! Local JSON Web Token decoder and terminal viewer. Tokens are split, their
//! header and payload decoded from base64url into JSON, and shown alongside
//! expiry information. Signatures are never verified and nothing is sent over
//! the network.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod token;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use token::{parse, DecodedToken, ParseError, ParseResult};
