//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep input parsing out of page and component bodies so it
//! can be unit tested without a browser.

pub mod product_form;
