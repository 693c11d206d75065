pub mod coroinha_mapper;
