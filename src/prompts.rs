//! Prompts for VLM-based invoice extraction.
//!
//! Centralising the prompt text here serves two purposes:
//!
//! 1. **Single source of truth** — changing the requested schema or a rule
//!    means editing exactly one place, next to the [`crate::invoice`] types
//!    it must stay in sync with.
//!
//! 2. **Testability** — unit tests can inspect the prompt directly without
//!    calling a real model, so schema regressions are caught cheaply.
//!
//! The page image itself is attached as an `image_url` part of the user
//! message, not embedded in the prompt text.

/// System message framing the model's role.
pub const SYSTEM_PROMPT: &str = "You are an AI specialized in invoice data extraction.";

/// Fixed user instruction describing the exact JSON schema to return.
pub const EXTRACTION_PROMPT: &str = r#"You are an expert in invoice data extraction. Analyze the attached image of an invoice and extract data into this structured JSON format:

JSON Structure:
1. Use the predefined sections (e.g., "invoice_metadata", "line_items", "totals").
2. Include any unknown or additional fields in a dedicated "extra_fields" dictionary at the appropriate level.
3. Ensure the response is a **valid JSON object**.
4. Add ALL line items found on the page to the "line_items" array; the schema shows one entry for simplicity but every item must appear.

Schema:
{
  "document_type": "invoice",
  "invoice_metadata": {
    "invoice_number": "string",
    "invoice_date": "string",
    "due_date": "string",
    "currency": "string",
    "vendor_details": {
      "name": "string",
      "address": "string",
      "contact": "string",
      "tax_id": "string",
      "extra_fields": {"key": "value"}
    },
    "customer_details": {
      "name": "string",
      "address": "string",
      "contact": "string",
      "tax_id": "string",
      "extra_fields": {"key": "value"}
    },
    "additional_metadata": {
      "payment_terms": "string",
      "reference_numbers": ["string"],
      "notes": "string",
      "extra_fields": {"key": "value"}
    }
  },
  "line_items": [
    {
      "transaction_date": "string",
      "description": "string",
      "transaction_type": "string",
      "quantity": "number",
      "unit": "string",
      "unit_price": "number",
      "tax_rate": "number",
      "tax_amount": "number",
      "subtotal": "number",
      "total": "number",
      "status": "string",
      "sub_items": [
        {
          "description": "string",
          "quantity": "number",
          "unit_price": "number",
          "total": "number"
        }
      ],
      "extra_fields": {"key": "value"}
    }
  ],
  "totals": {
    "previous_balance": "number",
    "current_charges": "number",
    "partial_totals": [
      {"type": "string", "amount": "number"}
    ],
    "taxes": [
      {"type": "string", "amount": "number", "rate": "number"}
    ],
    "discounts": "number",
    "adjustments": "number",
    "grand_total": "number",
    "amount_in_words": "string",
    "currency": "string",
    "extra_fields": {"key": "value"}
  },
  "payment_slip": {
    "payment_amount": "number",
    "payment_due_date": "string",
    "reference_number": "string",
    "bank_details": {
      "account_name": "string",
      "account_number": "string",
      "bank_name": "string",
      "extra_fields": {"key": "value"}
    },
    "extra_fields": {"key": "value"}
  },
  "unstructured_content": {
    "raw_text": "string",
    "notes": "string",
    "extra_fields": {"key": "value"}
  },
  "extra_fields": {"key": "value"}
}

Ensure all relevant details are captured. Gracefully handle missing fields with null values. Only a JSON response is required. STRICTLY do not return any other text with the JSON."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_every_schema_section() {
        for section in [
            "document_type",
            "invoice_metadata",
            "vendor_details",
            "customer_details",
            "line_items",
            "totals",
            "payment_slip",
            "unstructured_content",
            "extra_fields",
        ] {
            assert!(
                EXTRACTION_PROMPT.contains(section),
                "prompt is missing section '{section}'"
            );
        }
    }

    #[test]
    fn prompt_demands_json_only() {
        assert!(EXTRACTION_PROMPT.contains("valid JSON object"));
        assert!(EXTRACTION_PROMPT.contains("STRICTLY"));
    }
}
