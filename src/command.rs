//! Command synthesis from a bound ConfigRecord.
//!
//! The flag order of each domain is part of the external runner's
//! command-line grammar and comes straight from the schema tables.

use crate::config::{CommandSpec, ConfigRecord};
use crate::error::{ParserError, Result};

/// Build the runner command line for a record.
///
/// Returns `Ok(None)` for flag-only domains. Fragments are emitted as
/// `" <flag> <value>"` only for fields that are present and non-empty. When
/// the domain's switch key is true, the switch flag is emitted alone.
///
/// # Returns
///
/// * `Ok(Some(String))` - The command line
/// * `Ok(None)` - The domain has no runner command
/// * `Err(ParserError::AllocationFailure)` - The buffer could not be reserved
pub fn synthesize(record: &ConfigRecord) -> Result<Option<String>> {
    let Some(spec) = record.domain().schema().command.as_ref() else {
        return Ok(None);
    };

    let fragments = fragments(spec, record);
    let len = spec.base.len()
        + fragments
            .iter()
            .map(|(flag, value)| 1 + flag.len() + value.map_or(0, |v| 1 + v.len()))
            .sum::<usize>();

    let mut command = String::new();
    command.try_reserve_exact(len).map_err(|e| {
        ParserError::AllocationFailure(format!(
            "building {} command string: {}",
            record.domain(),
            e
        ))
    })?;

    command.push_str(spec.base);
    for (flag, value) in fragments {
        command.push(' ');
        command.push_str(flag);
        if let Some(value) = value {
            command.push(' ');
            command.push_str(value);
        }
    }

    Ok(Some(command))
}

fn fragments<'r>(
    spec: &CommandSpec,
    record: &'r ConfigRecord,
) -> Vec<(&'static str, Option<&'r str>)> {
    if let Some(switch) = &spec.switch
        && record.flag(switch.key)
    {
        return vec![(switch.flag, None)];
    }

    spec.flags
        .iter()
        .filter_map(|f| {
            record
                .value(f.key)
                .filter(|v| !v.is_empty())
                .map(|v| (f.flag, Some(v)))
        })
        .collect()
}
