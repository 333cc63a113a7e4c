/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which
/// the application core reaches infrastructure.
pub mod outbound;
