pub mod record;
pub mod state;

pub use record::StatusRecord;
pub use state::SiteState;
