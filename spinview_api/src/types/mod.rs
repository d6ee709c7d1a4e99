mod meta;
pub use self::meta::{Meta, PaginatedResponse, Paging, Response};

mod spin;
pub use self::spin::{Frame, ProductID, Spin, SpinDetail, SpinID, SpinStatus};
