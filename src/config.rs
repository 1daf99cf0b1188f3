use crate::route::Route;

/// Local storage key holding the session token.
pub static TOKEN_STORAGE_KEY: &str = "tkflix";

pub static TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub static YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Root of the tkflix backend, overridable at build time with `TKFLIX_API_URL`.
/// Must end in `/` so relative endpoints join beneath it.
pub static API_BASE_URL: &str = match option_env!("TKFLIX_API_URL") {
	Some(url) => url,
	None => "http://localhost:5000/api/v1/",
};

/// Build-time log level (`TKFLIX_LOG`), parsed by [`crate::logging::level`].
pub static LOG_LEVEL: Option<&str> = option_env!("TKFLIX_LOG");

/// A navigation link shown in the user menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEntry {
	pub display: &'static str,
	pub path: Route,
	/// Material icon ligature name.
	pub icon: &'static str,
}

pub static USER_MENU: &[MenuEntry] = &[
	MenuEntry {
		display: "favorites",
		path: Route::Favorites,
		icon: "favorite_border",
	},
	MenuEntry {
		display: "reviews",
		path: Route::Reviews,
		icon: "rate_review",
	},
	MenuEntry {
		display: "password update",
		path: Route::PasswordUpdate,
		icon: "lock_reset",
	},
];
