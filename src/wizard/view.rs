//! Read-only derivations — conditional section visibility and the review
//! headline figures. Nothing here is stored; everything is recomputed from
//! the record on demand.

use serde::Serialize;

use crate::record::ClientRecord;

/// Which conditional sections the current record state exposes.
///
/// The income checklist is not listed: it always shows all four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    pub spouse_details: bool,
    pub entity_list: bool,
    pub medicare_number: bool,
}

impl SectionVisibility {
    pub fn of(record: &ClientRecord) -> Self {
        Self {
            spouse_details: record.has_spouse,
            entity_list: record.has_entities,
            medicare_number: record.has_medicare_card,
        }
    }
}

/// The four headline cards shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSnapshot {
    /// Client's full name, or "Not Specified".
    pub lead_member: String,
    /// Spouse name when there is one, else "Individual".
    pub spouse_profile: String,
    /// "{n} Managed Entities" or "Standard Individual".
    pub complexity: String,
    /// Annual salary as whole dollars, e.g. `$95,000`.
    pub primary_income: String,
}

impl ReviewSnapshot {
    pub fn of(record: &ClientRecord) -> Self {
        let full_name = format!("{} {}", record.first_name, record.last_name);
        let lead = full_name.trim();
        let spouse = record.spouse_name.trim();

        Self {
            lead_member: if lead.is_empty() {
                "Not Specified".to_string()
            } else {
                lead.to_string()
            },
            spouse_profile: if record.has_spouse {
                if spouse.is_empty() {
                    "Not Specified".to_string()
                } else {
                    spouse.to_string()
                }
            } else {
                "Individual".to_string()
            },
            complexity: if record.has_entities {
                format!("{} Managed Entities", record.entities.len())
            } else {
                "Standard Individual".to_string()
            },
            primary_income: format_currency(record.annual_salary),
        }
    }
}

/// Whole-dollar rendering with thousands separators.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
