pub mod effects;
pub mod events;
pub mod logging;
pub mod session;
pub mod settings;
