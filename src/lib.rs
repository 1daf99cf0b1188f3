pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod media;
pub mod page;
pub mod route;
pub mod session;
pub mod util;

mod app;
pub use app::App;
