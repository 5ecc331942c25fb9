//! Activities - Host-Facing Table Operations
//!
//! Each activity is a plain struct: the host populates the input fields,
//! calls [`Activity::execute`] exactly once, then reads the output fields.
//! The `option_id` argument is an opaque host-side discriminator these
//! activities do not interpret.

mod errors;
mod join_tables;
mod table_filter;
mod table_search;

pub use errors::ActivityError;
pub use join_tables::JoinTables;
pub use table_filter::TableFilter;
pub use table_search::TableSearch;

/// A unit of work invoked by the host workflow engine.
pub trait Activity {
    /// Run the activity once. Inputs must be populated beforehand; outputs
    /// are valid only after an `Ok` return.
    fn execute(&mut self, option_id: Option<i32>) -> Result<(), ActivityError>;
}
