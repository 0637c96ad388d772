use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub(crate) mod api;
pub mod error;
mod server;

pub fn start_servers() -> Rocket<Build> {
    build_server()
}
