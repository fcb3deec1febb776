//! Display options shared by every table dumping tool.
//!
//! The tables logger extends this group with its own options; the fields
//! here only affect how a table is rendered, never which tables are logged.

use std::fmt;
use std::str::FromStr;

use clap::{ArgMatches, Command, ValueEnum};
use clap_num::maybe_hex;
use log::debug;
use serde::Serialize;

use crate::error::{LoadError, Violation};
use crate::options::{apply_help, flag, repeated, single, OptionGroup};

/// Byte order of the tag and length fields of a TLV record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TlvByteOrder {
    /// Most significant byte first
    #[default]
    Msb,
    /// Least significant byte first
    Lsb,
}

/// How to interpret part of an unknown section payload as TLV records.
///
/// Parsed from `start,size,tag_size,length_size,order`. Every field is
/// optional; a missing or empty field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TlvSyntax {
    /// Offset in the payload, `None` to locate the TLV area automatically.
    pub start: Option<usize>,
    /// Size of the TLV area, `None` up to the end of the payload.
    pub size: Option<usize>,
    /// Size in bytes of the tag field.
    pub tag_size: u8,
    /// Size in bytes of the length field.
    pub length_size: u8,
    /// Byte order of the tag and length fields.
    pub byte_order: TlvByteOrder,
}

impl Default for TlvSyntax {
    fn default() -> Self {
        TlvSyntax {
            start: None,
            size: None,
            tag_size: 1,
            length_size: 1,
            byte_order: TlvByteOrder::Msb,
        }
    }
}

fn parse_field_size(name: &str, field: &str) -> Result<u8, String> {
    match field {
        "" | "1" => Ok(1),
        "2" => Ok(2),
        "4" => Ok(4),
        other => Err(format!("{} must be 1, 2 or 4, got {:?}", name, other)),
    }
}

impl FromStr for TlvSyntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() > 5 {
            return Err(format!("expected at most 5 fields, got {}", fields.len()));
        }
        let field = |i: usize| fields.get(i).copied().unwrap_or("");

        let start = match field(0) {
            "" | "auto" => None,
            v => Some(maybe_hex::<usize>(v).map_err(|e| format!("start: {}", e))?),
        };
        let size = match field(1) {
            "" => None,
            v => Some(maybe_hex::<usize>(v).map_err(|e| format!("size: {}", e))?),
        };
        let tag_size = parse_field_size("tag size", field(2))?;
        let length_size = parse_field_size("length size", field(3))?;
        let byte_order = match field(4) {
            "" => TlvByteOrder::Msb,
            v => <TlvByteOrder as ValueEnum>::from_str(v, true)
                .map_err(|_| format!("unknown byte order {:?}", v))?,
        };

        Ok(TlvSyntax {
            start,
            size,
            tag_size,
            length_size,
            byte_order,
        })
    }
}

impl fmt::Display for TlvSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{},", start)?,
            None => write!(f, "auto,")?,
        }
        if let Some(size) = self.size {
            write!(f, "{}", size)?;
        }
        let order = match self.byte_order {
            TlvByteOrder::Msb => "msb",
            TlvByteOrder::Lsb => "lsb",
        };
        write!(f, ",{},{},{}", self.tag_size, self.length_size, order)
    }
}

/// Options controlling how tables are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TablesDisplayArgs {
    /// Raw hexadecimal dump of sections.
    pub raw_dump: bool,
    /// Dump sections as C/C++ byte arrays.
    pub c_style: bool,
    /// TLV syntaxes for sections of unknown types.
    pub tlv: Vec<TlvSyntax>,
    /// Minimum TLV value size to try a nested TLV interpretation, 0 = never.
    pub min_nested_tlv: usize,
    /// Private data specifier used when none is present.
    pub default_pds: u32,
}

const HELP: &[(&str, &str)] = &[
    (
        "c-style",
        "Same as --raw-dump (no interpretation of section) but dump the bytes in \
         C-language style, suitable for a byte array initializer.",
    ),
    (
        "default-pds",
        "Default private data specifier. Used when a private descriptor is found \
         without a preceding private_data_specifier_descriptor.",
    ),
    (
        "min-nested-tlv",
        "With --tlv, try to interpret the value field of each TLV record as a \
         nested TLV area when its size is at least this many bytes. \
         The default is 0, which means never.",
    ),
    ("raw-dump", "Raw dump of section, no interpretation."),
    (
        "tlv",
        "For sections of unknown types, interpret part of the payload as TLV \
         records. The value is start,size,tag_size,length_size,order. \
         start is the offset in the payload or 'auto'; size defaults to the end \
         of the section; tag_size and length_size are 1, 2 or 4 (default 1); \
         order is msb or lsb (default msb). All fields are optional. \
         Several --tlv options are allowed.",
    ),
];

impl OptionGroup for TablesDisplayArgs {
    fn define_options(&self, cmd: Command) -> Command {
        cmd.arg(flag("c-style"))
            .arg(single("default-pds", "PDS").value_parser(maybe_hex::<u32>))
            .arg(single("min-nested-tlv", "SIZE").value_parser(maybe_hex::<usize>))
            .arg(flag("raw-dump"))
            .arg(repeated("tlv", "SYNTAX"))
    }

    fn add_help(&self, cmd: Command) -> Command {
        apply_help(cmd, HELP)
    }

    fn load(&mut self, matches: &ArgMatches) -> Result<(), LoadError> {
        let mut violations = Vec::new();

        self.c_style = matches.get_flag("c-style");
        self.raw_dump = matches.get_flag("raw-dump") || self.c_style;
        self.min_nested_tlv = matches
            .get_one::<usize>("min-nested-tlv")
            .copied()
            .unwrap_or(0);
        self.default_pds = matches.get_one::<u32>("default-pds").copied().unwrap_or(0);

        self.tlv.clear();
        for value in matches.get_many::<String>("tlv").into_iter().flatten() {
            match value.parse::<TlvSyntax>() {
                Ok(syntax) => self.tlv.push(syntax),
                Err(reason) => violations.push(Violation::InvalidTlv {
                    value: value.clone(),
                    reason,
                }),
            }
        }

        debug!(
            "display options: raw_dump={}, c_style={}, tlv={}",
            self.raw_dump,
            self.c_style,
            self.tlv.len()
        );

        LoadError::check(violations)
    }
}
