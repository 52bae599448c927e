//! # Commands Module
//!
//! One handler per subcommand. Handlers take the open [`Store`] and return
//! the text to print, leaving stdout to the caller.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── item.rs     ◄─── items, add, search, edit, options
//! └── bill.rs     ◄─── bill, bills
//! ```
//!
//! [`Store`]: grocer_store::Store

pub mod bill;
pub mod item;
