pub mod reading;

pub use reading::VitalRecord;
