//! Per-(provider, report-type) pipeline configuration.
//!
//! The providers form a flat registry of config values rather than a type
//! hierarchy: every supported report is a [`ProviderConfig`] describing its
//! canonical columns, the fingerprints that recognize its tables, and how it
//! prints dates. The same pipeline functions run against any of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::{NoiseFingerprint, SchemaFingerprint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Vanguard,
    CapitalOne,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Vanguard => "vanguard",
            Provider::CapitalOne => "capitalone",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    ActivitySummary,
    Checking,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::ActivitySummary => "activity-summary",
            ReportType::Checking => "checking",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column's raw text is interpreted by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Amount,
    Category,
    Text,
}

/// One column of the canonical output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// How a provider prints statement dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// `MMM DD` with no year component; the statement's operative year must
    /// be supplied from outside the table.
    MonthDay,
    /// A chrono format string with an in-band year.
    Full(&'static str),
}

impl DateRule {
    pub fn needs_year(&self) -> bool {
        matches!(self, DateRule::MonthDay)
    }
}

/// Everything the pipeline needs to know about one (provider, report-type)
/// pair.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub report_type: ReportType,
    /// Canonical output columns, in order. Non-placeholder fingerprint cells
    /// name the canonical column they map to.
    pub columns: &'static [ColumnSpec],
    /// Page-variant fingerprints, checked in order.
    pub schemas: &'static [SchemaFingerprint],
    pub noise: &'static [NoiseFingerprint],
    pub date_rule: DateRule,
}

const CAPITAL_ONE_CHECKING_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "DATE",
        kind: ColumnKind::Date,
    },
    ColumnSpec {
        name: "DESCRIPTION",
        kind: ColumnKind::Text,
    },
    ColumnSpec {
        name: "CATEGORY",
        kind: ColumnKind::Category,
    },
    ColumnSpec {
        name: "AMOUNT",
        kind: ColumnKind::Amount,
    },
    ColumnSpec {
        name: "BALANCE",
        kind: ColumnKind::Amount,
    },
];

// Page 1 carries a spacing column between CATEGORY and AMOUNT that
// continuation pages drop.
const CAPITAL_ONE_CHECKING_SCHEMAS: &[SchemaFingerprint] = &[
    SchemaFingerprint {
        variant: "page-1",
        header: &["DATE", "DESCRIPTION", "CATEGORY", "", "AMOUNT", "BALANCE"],
    },
    SchemaFingerprint {
        variant: "page-2",
        header: &["DATE", "DESCRIPTION", "CATEGORY", "AMOUNT", "BALANCE"],
    },
];

const VANGUARD_ACTIVITY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "TRADE DATE",
        kind: ColumnKind::Date,
    },
    ColumnSpec {
        name: "SETTLEMENT DATE",
        kind: ColumnKind::Date,
    },
    ColumnSpec {
        name: "DESCRIPTION",
        kind: ColumnKind::Text,
    },
    ColumnSpec {
        name: "AMOUNT",
        kind: ColumnKind::Amount,
    },
];

const VANGUARD_ACTIVITY_SCHEMAS: &[SchemaFingerprint] = &[SchemaFingerprint {
    variant: "activity",
    header: &["TRADE DATE", "SETTLEMENT DATE", "DESCRIPTION", "AMOUNT"],
}];

/// The legal blurb on Vanguard statement cover pages, which the extractor
/// reliably misreads as a one-column table.
const VANGUARD_COVER_PAGE: NoiseFingerprint = NoiseFingerprint {
    label: "cover-page",
    grid: &[
        &["This statement reflects activity at and/or assets held by separate entities. Brokerage"],
        &["assets are held by Vanguard Brokerage Services® (VBS), a division of Vanguard Marketing"],
        &["Corporation (VMC), member FINRA and SIPC. VMC is a wholly owned subsidiary of The"],
        &["Vanguard Group, Inc. (VGI). Vanguard funds not held through your VBS account are held by"],
        &["VGI and are not protected by SIPC. Summary data are provided solely as a service and are"],
        &["for informational purposes only. If applicable, portfolio allocation consists of Vanguard"],
        &["funds and brokerage assets. For a complete listing of your brokerage assets, refer to the"],
        &["section titled \"Balances and holdings.\""],
    ],
};

/// Look up the configuration for a (provider, report-type) pair. `None`
/// means the combination is not supported.
pub fn provider_config(provider: Provider, report_type: ReportType) -> Option<ProviderConfig> {
    match (provider, report_type) {
        (Provider::CapitalOne, ReportType::Checking) => Some(ProviderConfig {
            provider,
            report_type,
            columns: CAPITAL_ONE_CHECKING_COLUMNS,
            schemas: CAPITAL_ONE_CHECKING_SCHEMAS,
            noise: &[],
            date_rule: DateRule::MonthDay,
        }),
        (Provider::Vanguard, ReportType::ActivitySummary) => Some(ProviderConfig {
            provider,
            report_type,
            columns: VANGUARD_ACTIVITY_COLUMNS,
            schemas: VANGUARD_ACTIVITY_SCHEMAS,
            noise: &[VANGUARD_COVER_PAGE],
            date_rule: DateRule::Full("%m/%d/%Y"),
        }),
        _ => None,
    }
}
