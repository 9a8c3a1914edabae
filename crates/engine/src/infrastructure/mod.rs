//! Infrastructure: external-dependency seams and operational configuration.

pub mod clock;
pub mod correlation;
pub mod ports;
pub mod settings;
pub mod testing;

pub use clock::SystemClock;
pub use correlation::CorrelationId;
pub use ports::ClockPort;
pub use settings::HomebrewSettings;
