pub mod enrich;
pub mod football;
pub mod form;
pub mod teams;
pub mod venues;
pub mod weather;
