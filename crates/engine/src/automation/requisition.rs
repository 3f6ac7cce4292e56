//! Gear requisition bundles and issued quantities.

use serde::{Deserialize, Serialize};

use laundry_domain::common::{int_or_zero, normalize_text, string_or_empty};

use super::support::{sanitize_positive_int, DEFAULT_DN};

pub const BUNDLE_CATEGORY: &str = "Gear Requisition Bundle";
const BUNDLE_SOURCE: &str = "Operative's Handbook pp.124-132 (bundle requisition automation).";

/// One requested line of gear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequisitionLine {
    #[serde(deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "int_or_zero")]
    pub dn: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub complexity: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub quantity: i64,
    #[serde(deserialize_with = "string_or_empty")]
    pub requirements: String,
}

impl Default for RequisitionLine {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            dn: DEFAULT_DN,
            complexity: 1,
            quantity: 0,
            requirements: String::new(),
        }
    }
}

impl RequisitionLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dn: i64, complexity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dn,
            complexity,
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }
}

/// Several lines folded into a single requisition test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearBundleRequest {
    pub id: String,
    pub name: String,
    pub category: String,
    pub dn: i64,
    pub complexity: i64,
    pub requirements: String,
    pub summary: String,
    pub source: String,
    pub line_count: usize,
    pub total_qty: i64,
    pub lines: Vec<RequisitionLine>,
}

/// Folds requisition lines into one test.
///
/// DN is the hardest line (at least 2) raised by one per two extra lines,
/// capped at 6. Complexity is the quantity-weighted line complexity plus one
/// per extra line plus one per three items beyond the first. Returns `None`
/// for an empty request.
pub fn build_gear_bundle_request(lines: &[RequisitionLine]) -> Option<GearBundleRequest> {
    if lines.is_empty() {
        return None;
    }

    let line_count = lines.len();
    let extra_lines = line_count as i64 - 1;
    let total_qty = lines
        .iter()
        .map(|line| sanitize_positive_int(line.quantity, 0))
        .fold(0, i64::saturating_add);
    let max_dn = lines.iter().map(|line| line.dn.max(2)).fold(2, i64::max);
    let base_complexity = lines
        .iter()
        .map(|line| {
            line.complexity
                .max(1)
                .saturating_mul(sanitize_positive_int(line.quantity, 0))
        })
        .fold(0, i64::saturating_add);

    let breadth_penalty = extra_lines;
    let volume_penalty = (total_qty - 1).max(0) / 3;
    let dn_escalation = extra_lines / 2;

    let mut requirements: Vec<String> = Vec::new();
    for line in lines {
        let text = normalize_text(&line.requirements);
        if !text.is_empty() && !requirements.contains(&text) {
            requirements.push(text);
        }
    }

    let name = match lines {
        [only] => format!(
            "{} ×{}",
            normalize_text(&only.name),
            sanitize_positive_int(only.quantity, 1)
        ),
        _ => format!("Requisition Bundle ({} lines)", line_count),
    };

    Some(GearBundleRequest {
        id: lines
            .iter()
            .map(|line| line.id.as_str())
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>()
            .join("+"),
        name,
        category: BUNDLE_CATEGORY.to_string(),
        dn: max_dn.saturating_add(dn_escalation).min(6),
        complexity: base_complexity
            .saturating_add(breadth_penalty)
            .saturating_add(volume_penalty)
            .max(1),
        requirements: requirements.join("; "),
        summary: format!(
            "Bundle requisition across {} line(s), {} total item(s). Complexity = base ({}) + breadth ({}) + volume ({}).",
            line_count, total_qty, base_complexity, breadth_penalty, volume_penalty
        ),
        source: BUNDLE_SOURCE.to_string(),
        line_count,
        total_qty,
        lines: lines.to_vec(),
    })
}

/// Inputs for issuing requisitioned gear onto an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantRequest {
    /// Quantity already on the actor's matching item
    #[serde(deserialize_with = "int_or_zero")]
    pub existing_quantity: i64,
    /// Quantity of one catalogue unit (a box of 12 rounds is 12)
    #[serde(deserialize_with = "int_or_zero")]
    pub template_quantity: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub requested_quantity: i64,
    /// Treat `requested_quantity` as the literal amount to add
    pub override_existing_quantity: bool,
}

impl Default for GrantRequest {
    fn default() -> Self {
        Self {
            existing_quantity: 0,
            template_quantity: 1,
            requested_quantity: 1,
            override_existing_quantity: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedQuantity {
    pub added_quantity: i64,
    pub next_quantity: i64,
}

pub fn calculate_granted_quantity(request: &GrantRequest) -> GrantedQuantity {
    let existing = request.existing_quantity.max(0);
    let template = request.template_quantity.max(1);
    let requested = sanitize_positive_int(request.requested_quantity, 1);
    let added_quantity = if request.override_existing_quantity {
        requested
    } else {
        template.saturating_mul(requested)
    };
    GrantedQuantity {
        added_quantity,
        next_quantity: existing.saturating_add(added_quantity),
    }
}
