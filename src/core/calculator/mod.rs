pub mod aggregate;
pub mod closing_series;
pub mod punctuality;
