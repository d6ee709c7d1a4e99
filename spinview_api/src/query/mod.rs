mod common;
pub use self::common::{Query, SortDirection};

mod spin;
pub use self::spin::{SpinQuery, SpinSortBy};
