// Application layer - Use cases over the transport repository
pub mod distance_service;
pub mod transport_repository;
