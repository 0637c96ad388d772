pub mod lookup_controller;
pub mod server;
