//! Screener filter codes: the authored code table and the URL codec.
//!
//! - `table`: code → (label, operator, threshold)
//! - `codec`: `f=` parameter → ordered descriptors

mod codec;
mod model;
mod table;

pub use codec::{CANONICAL_ORDER, DEFAULT_UNKNOWN_CODE_POLICY, FilterCodec, UnknownCodePolicy};
pub use model::{FilterDescriptor, FilterTemplate, Operator};
pub use table::FilterCodeTable;
