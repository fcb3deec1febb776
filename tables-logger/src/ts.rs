//! MPEG-TS identifiers used by the table logger options.

/// Largest valid PID (13 bits).
pub const PID_MAX: u16 = 0x1FFF;

/// Well-known PIDs in MPEG-TS.
pub mod pid {
    /// Program Association Table PID.
    pub const PAT: u16 = 0x0000;
    /// Conditional Access Table PID.
    pub const CAT: u16 = 0x0001;
    /// Network Information Table PID.
    pub const NIT: u16 = 0x0010;
    /// Service Description Table / Bouquet Association Table PID.
    pub const SDT: u16 = 0x0011;

    /// PIDs carrying the PSI/SI tables selected by `--psi-si`.
    /// EIT, TDT and TOT are not included.
    pub const PSI_SI: [u16; 4] = [PAT, CAT, NIT, SDT];
}

/// Table IDs for PSI/SI tables.
pub mod table_id {
    /// Program Association Section.
    pub const PAT: u8 = 0x00;
    /// Program Map Section.
    pub const PMT: u8 = 0x02;
    /// Service Description Section - actual.
    pub const SDT_ACTUAL: u8 = 0x42;
}
