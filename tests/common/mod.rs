#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use chesscom_client_sdk::{Client, Config};
use httpmock::MockServer;

/// Contact string tests send as the User-Agent header.
pub const CONTACT: &str = "SDK integration tests. Contact admin@example.com";

#[must_use]
pub fn client(server: &MockServer) -> Client {
    Client::new(&server.base_url(), Config::default()).unwrap()
}

#[must_use]
pub fn client_with_contact(server: &MockServer) -> Client {
    let config = Config::builder().user_agent(CONTACT).build();
    Client::new(&server.base_url(), config).unwrap()
}
