//! tables-logger library - command line arguments of an MPEG-TS table logger
//!
//! This library declares, documents and validates the options which tell a
//! table logging engine where to send PSI/SI tables, which tables to keep and
//! how much to record for each of them. Parsing is done by `clap`; loading
//! checks every cross-option constraint and reports all problems at once.
//!
//! ```rust
//! use clap::Command;
//! use tables_logger::{LogMode, OptionGroup, TablesLoggerArgs};
//!
//! let cmd = TablesLoggerArgs::default().register(Command::new("tables-logger"));
//! let matches = cmd
//!     .try_get_matches_from(["tables-logger", "--ip-udp", "227.1.1.1:1234", "--tid", "0x42"])
//!     .unwrap();
//!
//! let args = TablesLoggerArgs::from_matches(&matches).unwrap();
//! assert_eq!(args.mode, LogMode::Udp);
//! assert!(args.filter().accepts_table(0x42, Some(1)));
//! ```

pub mod display;
pub mod error;
pub mod filter;
pub mod logger;
pub mod options;
pub mod ts;

// Re-export commonly used types
pub use display::{TablesDisplayArgs, TlvByteOrder, TlvSyntax};
pub use error::{LoadError, Violation};
pub use filter::SectionFilter;
pub use logger::{LogMode, TablesLoggerArgs, DEFAULT_LOG_SIZE};
pub use options::OptionGroup;
