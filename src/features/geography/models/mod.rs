mod district;
mod path;
mod province;
mod sector;

pub use district::District;
pub use path::{JurisdictionPath, NodeKind};
pub use province::Province;
pub use sector::Sector;
