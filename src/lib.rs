pub mod geography;
pub mod server;
