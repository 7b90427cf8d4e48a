// Domain layer - Transport distance models and rules
pub mod distance;
pub mod error;
pub mod summary;
pub mod transport;
