//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from props and report user intent through callbacks;
//! pages own the state and the network calls.

pub mod product_item;
