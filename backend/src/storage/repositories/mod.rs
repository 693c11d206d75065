pub mod coroinha_repository;

pub use coroinha_repository::CoroinhaRepository;
