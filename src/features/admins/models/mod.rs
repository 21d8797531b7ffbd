mod administrator;
mod jurisdiction;
mod level;

pub use administrator::{AdminId, Administrator};
pub use jurisdiction::{Jurisdiction, ReplacementKey};
pub use level::{AdminLevel, AdminStatus};
