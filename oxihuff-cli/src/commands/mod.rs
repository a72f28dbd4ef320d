//! Command implementations for OxiHuff CLI.

pub mod codes;
pub mod compress;
pub mod decompress;
pub mod stats;

pub use codes::cmd_codes;
pub use compress::{CompressOptions, cmd_compress};
pub use decompress::cmd_decompress;
pub use stats::cmd_stats;
pub use test::cmd_test;
