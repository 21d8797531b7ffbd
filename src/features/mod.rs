pub mod access;
pub mod admins;
pub mod geography;
