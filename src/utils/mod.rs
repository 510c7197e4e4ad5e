pub mod time;
pub mod url;

pub use time::time_stamp;
pub use url::normalize_domain;
