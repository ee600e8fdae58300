//! Typed invoice data model.
//!
//! The model API is asked for a fixed schema but routinely omits fields,
//! invents new ones, or nests extras under `extra_fields`. Rather than an
//! untyped `Value` blob, each level is a struct of well-known optional
//! fields plus a `#[serde(flatten)]` pass-through map: recognised keys get
//! structure and unrecognised keys survive the round trip untouched. A
//! model-emitted `extra_fields` object is simply one more pass-through key.
//!
//! Every field is optional and every container defaults, so deserialisation
//! only fails when a well-known field carries a structurally wrong type —
//! which is exactly the case worth surfacing as an upstream error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept JSON `null` for a list field, treating it as empty.
///
/// The prompt tells the model to fill missing fields with null, so list
/// keys arrive as `null` about as often as `[]`.
fn null_to_empty_vec<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level extraction result returned by `POST /extract`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_metadata: Option<InvoiceMetadata>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Totals>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_slip: Option<PaymentSlip>,

    /// Free-form content the model could not place; string or object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstructured_content: Option<Value>,

    /// Pass-through for keys outside the fixed schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Header-level metadata of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_details: Option<PartyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<PartyDetails>,
    /// Payment terms, reference numbers, notes — shape left to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A party on the invoice. Vendor and customer share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single billed line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "null_to_empty_vec", skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<Value>,
    /// Model-specific annotations; string or object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_details: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document totals block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_charges: Option<f64>,
    #[serde(deserialize_with = "null_to_empty_vec", skip_serializing_if = "Vec::is_empty")]
    pub partial_totals: Vec<Value>,
    #[serde(deserialize_with = "null_to_empty_vec", skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Attached payment slip (giro section), when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSlip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bank coordinates on a payment slip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
