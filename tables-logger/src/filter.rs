//! Section filter derived from the loaded logger options.
//!
//! The filter is handed to the logging engine, which owns it for the whole
//! session. Only the PID set may grow afterwards, when PMT PIDs are found
//! in a PAT and `--psi-si` was requested.

use std::collections::BTreeSet;

use log::debug;

/// PID, table id and table id extension predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFilter {
    pids: BTreeSet<u16>,
    tids: BTreeSet<u8>,
    tidexts: BTreeSet<u16>,
    negate_tid: bool,
    negate_tidext: bool,
    add_pmt_pids: bool,
}

impl SectionFilter {
    pub(crate) fn new(
        pids: BTreeSet<u16>,
        tids: BTreeSet<u8>,
        tidexts: BTreeSet<u16>,
        negate_tid: bool,
        negate_tidext: bool,
        add_pmt_pids: bool,
    ) -> Self {
        SectionFilter {
            pids,
            tids,
            tidexts,
            negate_tid,
            negate_tidext,
            add_pmt_pids,
        }
    }

    /// Check whether sections on this PID are collected.
    ///
    /// An empty PID set collects every PID.
    pub fn accepts_pid(&self, pid: u16) -> bool {
        self.pids.is_empty() || self.pids.contains(&pid)
    }

    /// Check whether a section with this table id is logged.
    ///
    /// `tidext` is `None` for short sections, which are never rejected by
    /// the extension filter. An empty set never filters, negated or not.
    pub fn accepts_table(&self, tid: u8, tidext: Option<u16>) -> bool {
        let tid_ok = self.tids.is_empty() || self.tids.contains(&tid) != self.negate_tid;
        let tidext_ok = match tidext {
            None => true,
            Some(ext) => {
                self.tidexts.is_empty() || self.tidexts.contains(&ext) != self.negate_tidext
            }
        };
        tid_ok && tidext_ok
    }

    /// Extend the PID set with the PMT PIDs listed in a PAT.
    ///
    /// Does nothing unless PMT PIDs were requested and the PID set is
    /// restricted. Returns the number of PIDs which were not yet selected.
    pub fn add_pmt_pids<I>(&mut self, pmt_pids: I) -> usize
    where
        I: IntoIterator<Item = u16>,
    {
        if !self.add_pmt_pids || self.pids.is_empty() {
            return 0;
        }
        let added = pmt_pids
            .into_iter()
            .filter(|&pid| self.pids.insert(pid))
            .count();
        if added > 0 {
            debug!("filtering {} more PMT PIDs, {} PIDs total", added, self.pids.len());
        }
        added
    }

    /// PIDs currently selected, empty for all.
    pub fn pids(&self) -> &BTreeSet<u16> {
        &self.pids
    }
}
