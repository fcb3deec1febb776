//! Command line arguments of the tables logger.
//!
//! [`TablesLoggerArgs`] selects where captured tables go (text, binary
//! file or UDP), which tables are captured and how much is recorded for
//! each of them. It is built with defaults, loaded once from the parsed
//! command line and then only read by the logging engine.

use std::collections::BTreeSet;

use clap::{ArgMatches, Command};
use clap_num::{maybe_hex, maybe_hex_range};
use log::debug;
use serde::Serialize;

use crate::display::TablesDisplayArgs;
use crate::error::{LoadError, Violation};
use crate::filter::SectionFilter;
use crate::options::{apply_help, bounded, flag, repeated, single, supplied, OptionGroup};
use crate::ts::{pid, PID_MAX};

/// Type of logging destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Formatted human-readable tables.
    #[default]
    Text,
    /// Binary sections saved to files.
    Binary,
    /// Sections sent over UDP/IP.
    Udp,
}

/// Default number of payload bytes shown per table with `--log`.
pub const DEFAULT_LOG_SIZE: usize = 8;

/// Options of the tables logger, including the display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablesLoggerArgs {
    /// Display options.
    pub display: TablesDisplayArgs,
    /// Type of destination.
    pub mode: LogMode,
    /// Destination name (file or host:port), empty for standard output.
    pub destination: String,
    /// One binary output file per section.
    pub multi_files: bool,
    /// Flush output after each table.
    pub flush: bool,
    /// Outgoing local address for UDP.
    pub udp_local: Option<String>,
    /// Time-to-live of UDP packets, 0 for the system default.
    pub udp_ttl: u8,
    /// UDP messages contain raw sections, not structured messages.
    pub udp_raw: bool,
    /// Collect all sections, as they appear.
    pub all_sections: bool,
    /// Max number of tables to log, 0 for no limit.
    pub max_tables: u32,
    /// Display time stamps with each table.
    pub time_stamp: bool,
    /// Display packet index with each table.
    pub packet_index: bool,
    /// Payload must be diversified.
    pub diversified: bool,
    /// One-line-per-table logger mode.
    pub logger: bool,
    /// Size of payload to log per table.
    pub log_size: usize,
    /// Exclude the selected table ids.
    pub negate_tid: bool,
    /// Exclude the selected table id extensions.
    pub negate_tidext: bool,
    /// PID values to filter, empty for all.
    pub pid: BTreeSet<u16>,
    /// Add PMT PIDs when a PAT is found.
    pub add_pmt_pids: bool,
    /// Table id values to filter.
    pub tid: BTreeSet<u8>,
    /// Table id extension values to filter.
    pub tidext: BTreeSet<u16>,
}

impl Default for TablesLoggerArgs {
    fn default() -> Self {
        TablesLoggerArgs {
            display: TablesDisplayArgs::default(),
            mode: LogMode::Text,
            destination: String::new(),
            multi_files: false,
            flush: false,
            udp_local: None,
            udp_ttl: 0,
            udp_raw: false,
            all_sections: false,
            max_tables: 0,
            time_stamp: false,
            packet_index: false,
            diversified: false,
            logger: false,
            log_size: DEFAULT_LOG_SIZE,
            negate_tid: false,
            negate_tidext: false,
            pid: BTreeSet::new(),
            add_pmt_pids: false,
            tid: BTreeSet::new(),
            tidext: BTreeSet::new(),
        }
    }
}

// Destination options, in the order they are reported when conflicting.
const OUTPUT_FILE: &str = "output-file";
const BINARY_OUTPUT: &str = "binary-output";
const IP_UDP: &str = "ip-udp";

// Options only meaningful with --ip-udp.
const UDP_ONLY: [&str; 3] = ["local-udp", "ttl", "no-encapsulation"];

const HELP: &[(&str, &str)] = &[
    (
        "all-sections",
        "Display/save all sections, as they appear in the stream. By default, \
         collect complete tables, with all sections of the tables grouped and \
         ordered and collect each version of a table only once.",
    ),
    (
        BINARY_OUTPUT,
        "Save the sections in raw binary format in the specified output file name.",
    ),
    (
        "diversified-payload",
        "Select only sections with \"diversified\" payload. This means that section \
         payloads containing the same byte value (all 0x00 or all 0xFF for instance) \
         are ignored.",
    ),
    ("flush", "Flush output after each display or save of a table."),
    (
        IP_UDP,
        "Send the tables as UDP/IP messages to the specified destination. \
         The address is an IP address (unicast or multicast) or a host name. \
         The port is mandatory.",
    ),
    (
        "local-udp",
        "With --ip-udp, when the destination is a multicast address, specify the \
         IP address of the outgoing local interface.",
    ),
    (
        "log",
        "Display a short one-line log of each table instead of full table display.",
    ),
    (
        "log-size",
        "With option --log, specify how many bytes are displayed at the beginning \
         of the table payload (the header is not displayed). The default is 8 bytes.",
    ),
    (
        "max-tables",
        "Maximum number of tables to dump. After this limit is reached, stop.",
    ),
    (
        "multiple-files",
        "Create multiple binary output files, one per section. A binary output file \
         name must be specified (--binary-output). Each section is saved in a file \
         named after the table id, table id extension and section number.",
    ),
    (
        "negate-tid",
        "Negate the --tid filter: exclude the selected table ids.",
    ),
    (
        "negate-tid-ext",
        "Negate the --tid-ext filter: exclude the selected table id extensions.",
    ),
    (
        "no-encapsulation",
        "With --ip-udp, send the tables as raw binary messages in UDP packets. \
         By default, the tables are wrapped in structured messages.",
    ),
    (
        OUTPUT_FILE,
        "Save the tables in human-readable text format in the specified file. \
         By default, the tables are displayed on the standard output.",
    ),
    (
        "packet-index",
        "Display the index of the first and last TS packet of each displayed section \
         or table.",
    ),
    (
        "pid",
        "PID filter: select packets with this PID value. Several -p or --pid options \
         may be specified. Without -p or --pid option, all PID's are used.",
    ),
    (
        "psi-si",
        "Add all PID's containing PSI/SI tables, ie. PAT, CAT, PMT, NIT, SDT and BAT. \
         PMT PID's are added when found in the PAT. EIT, TDT and TOT are not included.",
    ),
    (
        "tid",
        "TID filter: select sections with this TID (table id) value. Several -t or \
         --tid options may be specified. Without -t or --tid option, all tables are \
         saved.",
    ),
    (
        "tid-ext",
        "TID-extension filter: select sections with this table id extension value \
         (apply to long sections only). Several -e or --tid-ext options may be \
         specified. Without -e or --tid-ext option, all tables are saved.",
    ),
    (
        "time-stamp",
        "Display a time stamp (current local time) with each table.",
    ),
    (
        "ttl",
        "With --ip-udp, specify the TTL (Time-To-Live) socket option. The actual part \
         of this parameter depends on the type of destination address.",
    ),
];

fn parse_pid(s: &str) -> Result<u16, String> {
    maybe_hex_range(s, 0, PID_MAX)
}

/// Check that a UDP destination looks like `host:port`.
fn is_udp_destination(destination: &str) -> bool {
    match destination.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

impl TablesLoggerArgs {
    /// Check if standard output shall be used.
    pub fn use_stdout(&self) -> bool {
        self.mode == LogMode::Text && self.destination.is_empty()
    }

    /// Check if the `--max-tables` limit is reached after `logged` tables.
    pub fn limit_reached(&self, logged: u32) -> bool {
        self.max_tables > 0 && logged >= self.max_tables
    }

    /// Build the section filter for a logging session.
    pub fn filter(&self) -> SectionFilter {
        SectionFilter::new(
            self.pid.clone(),
            self.tid.clone(),
            self.tidext.clone(),
            self.negate_tid,
            self.negate_tidext,
            self.add_pmt_pids,
        )
    }

    /// Build and load a configuration in one step.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, LoadError> {
        let mut args = TablesLoggerArgs::default();
        args.load(matches)?;
        Ok(args)
    }

    fn load_destination(&mut self, matches: &ArgMatches, violations: &mut Vec<Violation>) {
        let candidates = [
            (OUTPUT_FILE, LogMode::Text),
            (BINARY_OUTPUT, LogMode::Binary),
            (IP_UDP, LogMode::Udp),
        ];
        let given: Vec<_> = candidates
            .iter()
            .filter_map(|&(id, mode)| {
                matches
                    .get_one::<String>(id)
                    .map(|value| (id, mode, value.clone()))
            })
            .collect();

        if given.len() > 1 {
            violations.push(Violation::ConflictingDestinations {
                options: given.iter().map(|&(id, _, _)| id).collect(),
            });
        }

        match given.into_iter().next() {
            Some((id, mode, destination)) => {
                if destination.is_empty() {
                    violations.push(Violation::EmptyDestination { option: id });
                } else if mode == LogMode::Udp && !is_udp_destination(&destination) {
                    violations.push(Violation::InvalidUdpDestination(destination.clone()));
                }
                self.mode = mode;
                self.destination = destination;
            }
            None => {
                self.mode = LogMode::Text;
                self.destination.clear();
            }
        }
    }

    fn load_udp(&mut self, matches: &ArgMatches, violations: &mut Vec<Violation>) {
        if self.mode != LogMode::Udp {
            violations.extend(
                UDP_ONLY
                    .iter()
                    .filter(|id| supplied(matches, id))
                    .map(|&option| Violation::MissingRequirement {
                        option,
                        required: IP_UDP,
                    }),
            );
        }

        self.udp_local = matches
            .get_one::<String>("local-udp")
            .filter(|local| !local.is_empty())
            .cloned();
        self.udp_raw = matches.get_flag("no-encapsulation");
        self.udp_ttl = bounded(matches, "ttl", 1, u8::MAX as i64, violations)
            .and_then(|ttl| u8::try_from(ttl).ok())
            .unwrap_or(0);
    }

    fn load_output(&mut self, matches: &ArgMatches, violations: &mut Vec<Violation>) {
        self.multi_files = matches.get_flag("multiple-files");
        if self.multi_files && self.mode != LogMode::Binary {
            violations.push(Violation::MissingRequirement {
                option: "multiple-files",
                required: BINARY_OUTPUT,
            });
        }

        self.flush = matches.get_flag("flush");
        if self.flush && self.mode == LogMode::Udp {
            violations.push(Violation::Incompatible {
                option: "flush",
                other: IP_UDP,
            });
        }

        self.all_sections = matches.get_flag("all-sections");
        self.time_stamp = matches.get_flag("time-stamp");
        self.packet_index = matches.get_flag("packet-index");
        self.diversified = matches.get_flag("diversified-payload");

        self.max_tables = bounded(matches, "max-tables", 0, u32::MAX as i64, violations)
            .and_then(|max| u32::try_from(max).ok())
            .unwrap_or(0);

        self.logger = matches.get_flag("log");
        if supplied(matches, "log-size") && !self.logger {
            violations.push(Violation::MissingRequirement {
                option: "log-size",
                required: "log",
            });
        }
        let max_log_size = i64::try_from(usize::MAX).unwrap_or(i64::MAX);
        self.log_size = bounded(matches, "log-size", 0, max_log_size, violations)
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(DEFAULT_LOG_SIZE);
    }

    fn load_filters(&mut self, matches: &ArgMatches) {
        self.pid = matches
            .get_many::<u16>("pid")
            .into_iter()
            .flatten()
            .copied()
            .collect();
        self.add_pmt_pids = matches.get_flag("psi-si");
        if self.add_pmt_pids {
            self.pid.extend(pid::PSI_SI);
        }

        self.tid = matches
            .get_many::<u8>("tid")
            .into_iter()
            .flatten()
            .copied()
            .collect();
        self.tidext = matches
            .get_many::<u16>("tid-ext")
            .into_iter()
            .flatten()
            .copied()
            .collect();
        self.negate_tid = matches.get_flag("negate-tid");
        self.negate_tidext = matches.get_flag("negate-tid-ext");
    }
}

impl OptionGroup for TablesLoggerArgs {
    fn define_options(&self, cmd: Command) -> Command {
        self.display
            .define_options(cmd)
            .arg(flag("all-sections").short('a'))
            .arg(single(BINARY_OUTPUT, "FILE").short('b'))
            .arg(flag("diversified-payload").short('d'))
            .arg(flag("flush").short('f'))
            .arg(single(IP_UDP, "HOST:PORT").short('i'))
            .arg(single("local-udp", "ADDRESS"))
            .arg(flag("log"))
            .arg(
                single("log-size", "SIZE")
                    .value_parser(clap::value_parser!(i64))
                    .allow_negative_numbers(true),
            )
            .arg(
                single("max-tables", "COUNT")
                    .short('x')
                    .value_parser(clap::value_parser!(i64))
                    .allow_negative_numbers(true),
            )
            .arg(flag("multiple-files").short('m'))
            .arg(flag("negate-tid").short('n'))
            .arg(flag("negate-tid-ext"))
            .arg(flag("no-encapsulation"))
            .arg(single(OUTPUT_FILE, "FILE").short('o'))
            .arg(flag("packet-index"))
            .arg(repeated("pid", "PID").short('p').value_parser(parse_pid))
            .arg(flag("psi-si"))
            .arg(repeated("tid", "ID").short('t').value_parser(maybe_hex::<u8>))
            .arg(repeated("tid-ext", "ID").short('e').value_parser(maybe_hex::<u16>))
            .arg(flag("time-stamp"))
            .arg(
                single("ttl", "VALUE")
                    .value_parser(clap::value_parser!(i64))
                    .allow_negative_numbers(true),
            )
    }

    fn add_help(&self, cmd: Command) -> Command {
        apply_help(self.display.add_help(cmd), HELP)
    }

    fn load(&mut self, matches: &ArgMatches) -> Result<(), LoadError> {
        let mut violations = match self.display.load(matches) {
            Ok(()) => Vec::new(),
            Err(err) => err.into_violations(),
        };

        self.load_destination(matches, &mut violations);
        self.load_udp(matches, &mut violations);
        self.load_output(matches, &mut violations);
        self.load_filters(matches);

        debug!(
            "tables logger: mode={:?}, destination={:?}, pids={}, tids={}, tidexts={}",
            self.mode,
            self.destination,
            self.pid.len(),
            self.tid.len(),
            self.tidext.len()
        );
        debug!("tables logger: max_tables={}, logger={}", self.max_tables, self.logger);

        LoadError::check(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::table_id;

    fn command() -> Command {
        TablesLoggerArgs::default().register(Command::new("tables-logger"))
    }

    fn load(argv: &[&str]) -> Result<TablesLoggerArgs, LoadError> {
        let matches = command()
            .try_get_matches_from(std::iter::once("tables-logger").chain(argv.iter().copied()))
            .unwrap();
        TablesLoggerArgs::from_matches(&matches)
    }

    fn violations(argv: &[&str]) -> Vec<Violation> {
        load(argv).unwrap_err().into_violations()
    }

    #[test]
    fn test_options_are_consistent() {
        command().debug_assert();
    }

    #[test]
    fn test_define_options_is_repeatable() {
        let args = TablesLoggerArgs::default();
        let first = args.define_options(Command::new("a"));
        let second = args.define_options(Command::new("a"));
        let ids = |cmd: &Command| {
            cmd.get_arguments()
                .map(|a| a.get_id().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_help_is_attached() {
        let cmd = command();
        for arg in cmd.get_arguments() {
            assert!(arg.get_help().is_some(), "no help for --{}", arg.get_id());
        }
    }

    #[test]
    fn test_use_stdout() {
        for mode in [LogMode::Text, LogMode::Binary, LogMode::Udp] {
            for destination in ["", "out.bin"] {
                let args = TablesLoggerArgs {
                    mode,
                    destination: destination.to_string(),
                    ..TablesLoggerArgs::default()
                };
                assert_eq!(
                    args.use_stdout(),
                    mode == LogMode::Text && destination.is_empty()
                );
            }
        }
    }

    #[test]
    fn test_defaults() {
        let args = load(&[]).unwrap();
        assert_eq!(args.mode, LogMode::Text);
        assert_eq!(args.destination, "");
        assert!(args.use_stdout());
        assert_eq!(args.log_size, DEFAULT_LOG_SIZE);
        assert_eq!(args.max_tables, 0);
        assert_eq!(args, TablesLoggerArgs::default());
    }

    #[test]
    fn test_destinations() {
        let args = load(&["--ip-udp", "227.1.1.1:1234"]).unwrap();
        assert_eq!(args.mode, LogMode::Udp);
        assert_eq!(args.destination, "227.1.1.1:1234");
        assert!(!args.use_stdout());

        let args = load(&["-b", "tables.bin"]).unwrap();
        assert_eq!(args.mode, LogMode::Binary);
        assert_eq!(args.destination, "tables.bin");

        let args = load(&["-o", "tables.txt"]).unwrap();
        assert_eq!(args.mode, LogMode::Text);
        assert_eq!(args.destination, "tables.txt");
        assert!(!args.use_stdout());
    }

    #[test]
    fn test_conflicting_destinations() {
        assert_eq!(
            violations(&["-o", "a.txt", "-i", "localhost:1234"]),
            vec![Violation::ConflictingDestinations {
                options: vec![OUTPUT_FILE, IP_UDP],
            }]
        );
    }

    #[test]
    fn test_invalid_udp_destination() {
        for destination in ["227.1.1.1", ":1234", "host:port", "host:70000"] {
            assert_eq!(
                violations(&["--ip-udp", destination]),
                vec![Violation::InvalidUdpDestination(destination.to_string())]
            );
        }
        assert!(load(&["--ip-udp", "[ff02::1]:5000"]).is_ok());
    }

    #[test]
    fn test_udp_options() {
        let args = load(&[
            "-i",
            "227.1.1.1:1234",
            "--local-udp",
            "192.168.1.10",
            "--ttl",
            "4",
            "--no-encapsulation",
        ])
        .unwrap();
        assert_eq!(args.udp_local.as_deref(), Some("192.168.1.10"));
        assert_eq!(args.udp_ttl, 4);
        assert!(args.udp_raw);
    }

    #[test]
    fn test_empty_destinations() {
        assert_eq!(
            violations(&["-b", "", "-m"]),
            vec![Violation::EmptyDestination {
                option: BINARY_OUTPUT,
            }]
        );
        assert_eq!(
            violations(&["--output-file", ""]),
            vec![Violation::EmptyDestination {
                option: OUTPUT_FILE,
            }]
        );
        assert_eq!(
            violations(&["--ip-udp", ""]),
            vec![Violation::EmptyDestination { option: IP_UDP }]
        );
    }

    #[test]
    fn test_empty_local_udp_is_unspecified() {
        let args = load(&["-i", "227.1.1.1:1234", "--local-udp", ""]).unwrap();
        assert_eq!(args.udp_local, None);
    }

    #[test]
    fn test_log_size_upper_bound() {
        let max = i64::MAX.to_string();
        let result = load(&["--log", "--log-size", &max]);
        if usize::BITS < 64 {
            assert!(matches!(
                result.unwrap_err().violations(),
                [Violation::OutOfRange { option: "log-size", .. }]
            ));
        } else {
            assert_eq!(result.unwrap().log_size, i64::MAX as usize);
        }
    }

    #[test]
    fn test_udp_options_without_udp() {
        assert_eq!(
            violations(&["--ttl", "4"]),
            vec![Violation::MissingRequirement {
                option: "ttl",
                required: IP_UDP,
            }]
        );
        assert_eq!(
            violations(&["-b", "out.bin", "--no-encapsulation"]),
            vec![Violation::MissingRequirement {
                option: "no-encapsulation",
                required: IP_UDP,
            }]
        );
    }

    #[test]
    fn test_ttl_range() {
        assert!(matches!(
            violations(&["-i", "localhost:1234", "--ttl", "0"])[..],
            [Violation::OutOfRange { option: "ttl", value: 0, .. }]
        ));
        assert!(matches!(
            violations(&["-i", "localhost:1234", "--ttl", "256"])[..],
            [Violation::OutOfRange { option: "ttl", value: 256, .. }]
        ));
    }

    #[test]
    fn test_file_options() {
        let args = load(&["-b", "out.bin", "-m", "-f"]).unwrap();
        assert!(args.multi_files);
        assert!(args.flush);

        assert!(load(&["--flush"]).unwrap().flush);

        assert_eq!(
            violations(&["-o", "out.txt", "-m"]),
            vec![Violation::MissingRequirement {
                option: "multiple-files",
                required: BINARY_OUTPUT,
            }]
        );
        assert_eq!(
            violations(&["-i", "localhost:1234", "-f"]),
            vec![Violation::Incompatible {
                option: "flush",
                other: IP_UDP,
            }]
        );
    }

    #[test]
    fn test_log_size() {
        let args = load(&["--log"]).unwrap();
        assert!(args.logger);
        assert_eq!(args.log_size, 8);

        let args = load(&["--log", "--log-size", "16"]).unwrap();
        assert!(args.logger);
        assert_eq!(args.log_size, 16);

        assert_eq!(
            violations(&["--log-size", "16"]),
            vec![Violation::MissingRequirement {
                option: "log-size",
                required: "log",
            }]
        );
        assert!(matches!(
            violations(&["--log", "--log-size", "-1"])[..],
            [Violation::OutOfRange { option: "log-size", value: -1, .. }]
        ));
    }

    #[test]
    fn test_max_tables() {
        let args = load(&["-x", "5"]).unwrap();
        assert_eq!(args.max_tables, 5);
        assert!(!args.limit_reached(4));
        assert!(args.limit_reached(5));

        let args = load(&["--max-tables", "0"]).unwrap();
        assert!(!args.limit_reached(u32::MAX));

        assert_eq!(
            violations(&["--max-tables", "-1"]),
            vec![Violation::OutOfRange {
                option: "max-tables",
                value: -1,
                min: 0,
                max: u32::MAX as i64,
            }]
        );
    }

    #[test]
    fn test_all_violations_reported() {
        let found = violations(&[
            "--ttl",
            "4",
            "--log-size",
            "4",
            "--max-tables",
            "-3",
            "--tlv",
            "0,0,3",
        ]);
        assert_eq!(found.len(), 4);
        assert!(matches!(found[0], Violation::InvalidTlv { .. }));
    }

    #[test]
    fn test_flags() {
        let args = load(&["-a", "-d", "--time-stamp", "--packet-index", "--raw-dump"]).unwrap();
        assert!(args.all_sections);
        assert!(args.diversified);
        assert!(args.time_stamp);
        assert!(args.packet_index);
        assert!(args.display.raw_dump);
    }

    #[test]
    fn test_pid_filter() {
        let args = load(&["-p", "0x100", "--pid", "257"]).unwrap();
        assert_eq!(args.pid, [0x100, 0x101].into_iter().collect());
        assert!(!args.add_pmt_pids);

        let args = load(&["--psi-si"]).unwrap();
        assert_eq!(args.pid, pid::PSI_SI.into_iter().collect());
        assert!(args.add_pmt_pids);
    }

    #[test]
    fn test_pid_out_of_range_rejected_by_parser() {
        assert!(command()
            .try_get_matches_from(["tables-logger", "--pid", "0x2000"])
            .is_err());
        assert!(command()
            .try_get_matches_from(["tables-logger", "--tid", "256"])
            .is_err());
    }

    #[test]
    fn test_tid_filter() {
        let args = load(&["--tid", "0x42"]).unwrap();
        assert_eq!(args.tid, [0x42].into_iter().collect());
        assert!(!args.negate_tid);
        let filter = args.filter();
        assert!(filter.accepts_table(table_id::SDT_ACTUAL, Some(1)));
        assert!(!filter.accepts_table(table_id::PAT, Some(1)));

        let args = load(&["--tid", "0x42", "-n"]).unwrap();
        assert!(args.negate_tid);
        let filter = args.filter();
        assert!(!filter.accepts_table(table_id::SDT_ACTUAL, Some(1)));
        assert!(filter.accepts_table(table_id::PAT, Some(1)));
    }

    #[test]
    fn test_tidext_filter() {
        let args = load(&["-e", "0x0400", "-e", "1025", "--negate-tid-ext"]).unwrap();
        assert_eq!(args.tidext, [0x0400, 0x0401].into_iter().collect());
        assert!(args.negate_tidext);
        let filter = args.filter();
        assert!(!filter.accepts_table(table_id::PMT, Some(0x0400)));
        assert!(filter.accepts_table(table_id::PMT, Some(0x0402)));
    }

    #[test]
    fn test_serialize() {
        let args = load(&["-i", "227.1.1.1:1234", "--tid", "2"]).unwrap();
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["mode"], "udp");
        assert_eq!(json["destination"], "227.1.1.1:1234");
        assert_eq!(json["tid"], serde_json::json!([2]));
    }
}
