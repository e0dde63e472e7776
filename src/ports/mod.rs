/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the application core uses to
/// reach infrastructure: POM repositories, catalog destinations, the console.
pub mod outbound;
