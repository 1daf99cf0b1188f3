mod auth_switch;
pub use auth_switch::*;
mod favorite_button;
pub use favorite_button::*;
mod favorite_card;
pub use favorite_card::*;
pub mod user_menu;
pub use user_menu::UserMenu;
