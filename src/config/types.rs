//! Domain schemas for the ACS run configuration.
//!
//! Each test-suite domain is described by a static [`DomainSchema`]: its
//! section headers, the closed set of keys it recognizes, and the ordered
//! flag table used to build the runner command line.

use serde::Serialize;
use std::fmt;

/// One of the six configuration domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    Bsa,
    Sbsa,
    Sct,
    BbsrSct,
    Automation,
    Scrt,
}

impl Domain {
    /// Every domain, in the order the usage message lists them.
    pub const ALL: [Domain; 6] = [
        Domain::Bsa,
        Domain::Sbsa,
        Domain::Sct,
        Domain::BbsrSct,
        Domain::Automation,
        Domain::Scrt,
    ];

    /// The section tag as written between brackets.
    pub fn tag(self) -> &'static str {
        match self {
            Domain::Bsa => "BSA",
            Domain::Sbsa => "SBSA",
            Domain::Sct => "SCT",
            Domain::BbsrSct => "BBSR_SCT",
            Domain::Automation => "AUTOMATION",
            Domain::Scrt => "SCRT",
        }
    }

    /// The command-line flag name (without dashes) selecting this domain.
    pub fn flag(self) -> &'static str {
        match self {
            Domain::Bsa => "bsa",
            Domain::Sbsa => "sbsa",
            Domain::Sct => "sct",
            Domain::BbsrSct => "bbsr_sct",
            Domain::Automation => "automation",
            Domain::Scrt => "scrt",
        }
    }

    /// Look up a domain by its flag name.
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.flag() == flag)
    }

    /// The static schema for this domain.
    pub fn schema(self) -> &'static DomainSchema {
        match self {
            Domain::Bsa => &BSA_SCHEMA,
            Domain::Sbsa => &SBSA_SCHEMA,
            Domain::Sct => &SCT_SCHEMA,
            Domain::BbsrSct => &BBSR_SCT_SCHEMA,
            Domain::Automation => &AUTOMATION_SCHEMA,
            Domain::Scrt => &SCRT_SCHEMA,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How far a section extends once its header has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBoundary {
    /// A section ends at the next header the schema does not list.
    #[default]
    Strict,
    /// The firmware parser's scan: a section opens at the first untrimmed
    /// line starting with the schema's legacy prefix, and every following
    /// line stays eligible, including lines under later headers.
    Legacy,
}

/// Value kind of a recognized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `true` only when the value is exactly `"true"`.
    Bool,
    /// Copied verbatim.
    Text,
}

/// A key recognized inside a domain section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub name: &'static str,
    pub kind: KeyKind,
}

impl KeySpec {
    const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: KeyKind::Bool,
        }
    }

    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: KeyKind::Text,
        }
    }
}

/// Maps a text key onto a `-flag value` fragment of the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub flag: &'static str,
    pub key: &'static str,
}

/// A boolean key that, when true, replaces all flag fragments with a
/// single bare flag (SCT's `-u` UI mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSpec {
    pub key: &'static str,
    pub flag: &'static str,
}

/// How to build the runner command for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name of the variable the command is published under.
    pub variable: &'static str,
    /// Runner invocation name.
    pub base: &'static str,
    pub switch: Option<SwitchSpec>,
    /// Fragments in emission order.
    pub flags: &'static [FlagSpec],
}

/// Declarative description of one domain's section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSchema {
    /// Header literals, brackets included, that open the section.
    pub headers: &'static [&'static str],
    /// Leading characters of an untrimmed line that open the section in
    /// legacy mode, as many as the firmware compares.
    pub legacy_prefix: &'static str,
    /// Boolean key published as the domain's enabled flag.
    pub enable_key: &'static str,
    pub keys: &'static [KeySpec],
    /// `None` for flag-only domains.
    pub command: Option<CommandSpec>,
}

impl DomainSchema {
    /// Find the spec for a key by exact name.
    pub fn key(&self, name: &str) -> Option<&'static KeySpec> {
        self.keys.iter().find(|spec| spec.name == name)
    }
}

static BSA_SCHEMA: DomainSchema = DomainSchema {
    headers: &["[BSA]"],
    legacy_prefix: "[BSA]",
    enable_key: "automation_bsa_run",
    keys: &[
        KeySpec::boolean("automation_bsa_run"),
        KeySpec::text("bsa_modules"),
        KeySpec::text("bsa_tests"),
        KeySpec::text("bsa_skip"),
        KeySpec::text("bsa_verbose"),
    ],
    command: Some(CommandSpec {
        variable: "BsaCommand",
        base: "bsa.efi",
        switch: None,
        flags: &[
            FlagSpec {
                flag: "-m",
                key: "bsa_modules",
            },
            FlagSpec {
                flag: "-t",
                key: "bsa_tests",
            },
            FlagSpec {
                flag: "-skip",
                key: "bsa_skip",
            },
            FlagSpec {
                flag: "-v",
                key: "bsa_verbose",
            },
        ],
    }),
};

static SBSA_SCHEMA: DomainSchema = DomainSchema {
    headers: &["[SBSA]"],
    legacy_prefix: "[SBSA]",
    enable_key: "automation_sbsa_run",
    keys: &[
        KeySpec::boolean("automation_sbsa_run"),
        KeySpec::text("sbsa_modules"),
        KeySpec::text("sbsa_level"),
        KeySpec::text("sbsa_tests"),
        KeySpec::text("sbsa_skip"),
        KeySpec::text("sbsa_verbose"),
    ],
    command: Some(CommandSpec {
        variable: "SbsaCommand",
        base: "sbsa.efi",
        switch: None,
        flags: &[
            FlagSpec {
                flag: "-m",
                key: "sbsa_modules",
            },
            FlagSpec {
                flag: "-l",
                key: "sbsa_level",
            },
            FlagSpec {
                flag: "-t",
                key: "sbsa_tests",
            },
            FlagSpec {
                flag: "-skip",
                key: "sbsa_skip",
            },
            FlagSpec {
                flag: "-v",
                key: "sbsa_verbose",
            },
        ],
    }),
};

static SCT_SCHEMA: DomainSchema = DomainSchema {
    headers: &["[SCT]"],
    legacy_prefix: "[SCT]",
    enable_key: "automation_sct_run",
    keys: &[
        KeySpec::boolean("automation_sct_run"),
        KeySpec::boolean("sct_ui_mode"),
        KeySpec::text("sct_sequence_file"),
    ],
    command: Some(CommandSpec {
        variable: "SctCommand",
        base: "sct",
        switch: Some(SwitchSpec {
            key: "sct_ui_mode",
            flag: "-u",
        }),
        flags: &[FlagSpec {
            flag: "-s",
            key: "sct_sequence_file",
        }],
    }),
};

static BBSR_SCT_SCHEMA: DomainSchema = DomainSchema {
    headers: &["[BBSR_SCT]"],
    legacy_prefix: "[BBSR",
    enable_key: "automation_bbsr_sct_run",
    keys: &[
        KeySpec::boolean("automation_bbsr_sct_run"),
        KeySpec::text("bbsr_sct_sequence_file"),
    ],
    command: Some(CommandSpec {
        variable: "BbsrSctCommand",
        base: "sct",
        switch: None,
        flags: &[FlagSpec {
            flag: "-s",
            key: "bbsr_sct_sequence_file",
        }],
    }),
};

static AUTOMATION_SCHEMA: DomainSchema = DomainSchema {
    headers: &["[AUTOMATION]"],
    legacy_prefix: "[AUTO",
    enable_key: "config_enabled_for_automation_run",
    keys: &[KeySpec::boolean("config_enabled_for_automation_run")],
    command: None,
};

static SCRT_SCHEMA: DomainSchema = DomainSchema {
    // The run flag lives in the automation section.
    headers: &["[AUTOMATION]", "[SCRT]"],
    legacy_prefix: "[AUTO",
    enable_key: "automation_scrt_run",
    keys: &[KeySpec::boolean("automation_scrt_run")],
    command: None,
};
