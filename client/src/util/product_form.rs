//! Form-to-payload helpers shared by the create form and the row edit form.
//!
//! Number inputs arrive as raw text. Parsing takes the leading integer the way
//! a browser `parseInt(value, 10)` would, so `"12abc"` still yields 12.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::{NewProduct, Product};

/// Parse the leading base-10 integer of a number input.
///
/// Surrounding whitespace and one leading sign are accepted. Returns `None`
/// when no digits lead the text or the value does not fit in `i64`.
pub fn parse_price_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Build the create payload from the creation form. Unparsable prices become 0.
pub fn build_new_product(name: &str, explanation: &str, price_raw: &str) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        explanation: explanation.to_owned(),
        price: parse_price_input(price_raw).unwrap_or(0),
    }
}

/// Build the full replacement record from a row's edit form.
///
/// The `id` is always the original's. An unparsable price keeps the
/// original price.
pub fn build_edited_product(original: &Product, name: &str, explanation: &str, price_raw: &str) -> Product {
    Product {
        id: original.id.clone(),
        name: name.to_owned(),
        explanation: explanation.to_owned(),
        price: parse_price_input(price_raw).unwrap_or(original.price),
    }
}
