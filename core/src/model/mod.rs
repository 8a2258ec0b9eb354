pub mod goal;
pub mod record;
pub mod week;
