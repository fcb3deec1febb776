//! Option group seam shared by the display and logger arguments.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::{LoadError, Violation};

/// A set of command line options which can declare itself on a
/// [`Command`] and load its values back from the parsed [`ArgMatches`].
pub trait OptionGroup {
    /// Declare every option of the group.
    fn define_options(&self, cmd: Command) -> Command;

    /// Attach help text to the options declared by [`define_options`].
    ///
    /// Panics (inside clap) when an option was not declared first.
    ///
    /// [`define_options`]: OptionGroup::define_options
    fn add_help(&self, cmd: Command) -> Command;

    /// Load the option values from a parse result.
    ///
    /// On error the group is left partially loaded and must be discarded.
    fn load(&mut self, matches: &ArgMatches) -> Result<(), LoadError>;

    /// Declare the options and their help in one go.
    fn register(&self, cmd: Command) -> Command {
        self.add_help(self.define_options(cmd))
    }
}

/// Boolean switch `--<id>`.
pub(crate) fn flag(id: &'static str) -> Arg {
    Arg::new(id).long(id).action(ArgAction::SetTrue)
}

/// Single valued option `--<id> <value_name>`.
pub(crate) fn single(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name(value_name)
        .action(ArgAction::Set)
}

/// Repeatable option `--<id> <value_name>`.
pub(crate) fn repeated(id: &'static str, value_name: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name(value_name)
        .action(ArgAction::Append)
}

/// Attach each `(id, help)` pair to the already declared options.
pub(crate) fn apply_help(cmd: Command, help: &[(&'static str, &'static str)]) -> Command {
    help.iter()
        .fold(cmd, |cmd, &(id, text)| cmd.mut_arg(id, |arg| arg.help(text)))
}

/// True when the option was given on the command line (not a default).
pub(crate) fn supplied(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Read an integer option and check it against `min..=max`.
///
/// Returns `None` when the option is absent or out of range; the latter
/// is recorded in `violations`.
pub(crate) fn bounded(
    matches: &ArgMatches,
    id: &'static str,
    min: i64,
    max: i64,
    violations: &mut Vec<Violation>,
) -> Option<i64> {
    let value = matches.get_one::<i64>(id).copied()?;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        violations.push(Violation::OutOfRange {
            option: id,
            value,
            min,
            max,
        });
        None
    }
}
