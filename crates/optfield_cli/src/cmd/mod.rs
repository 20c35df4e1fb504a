/// Optional-container read command.
pub mod get;
/// Logging setup for the binary.
pub mod logging;
/// Key presence classification command.
pub mod probe;

mod util;
