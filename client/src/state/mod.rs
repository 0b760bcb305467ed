//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The listing view owns a single `ProductsState`; row edit toggles stay local
//! to each row component and never live here.

pub mod products;
