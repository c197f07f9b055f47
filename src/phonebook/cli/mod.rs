mod menu;
mod print;
mod setup;

pub use menu::run_session;
pub use setup::Cli;
