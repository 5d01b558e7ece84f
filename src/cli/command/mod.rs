pub mod conditions;
pub mod report;
pub mod stations;
pub mod tides;
pub mod waves;

pub use conditions::conditions;
pub use report::{report, ReportConfig};
pub use stations::stations;
pub use tides::tides;
pub use waves::waves;
