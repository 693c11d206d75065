pub mod coroinha;
