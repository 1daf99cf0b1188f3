use std::rc::Rc;
use yewdux::store::{Reducer, Store};

mod favorite;
pub use favorite::*;
mod user;
pub use user::*;
pub mod persist;

static TARGET: &str = "session";

/// The signed-in user, if any, and the media they have saved as favorites.
///
/// Only ever changed through [`SessionAction`]s; persistence of the session token
/// is handled separately by [`persist::TokenSync`].
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Session {
	pub user: Option<UserInfo>,
	/// Most recently added first.
	pub favorites: Vec<FavoriteEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
	/// Replace the current user; `None` signs out.
	SetUser(Option<UserInfo>),
	/// Replace the whole favorites list, e.g. after fetching it from the backend.
	SetListFavorites(Vec<FavoriteEntry>),
	/// Prepend a favorite. Duplicates are not checked, see [`Session::is_favorite`].
	AddFavorite(FavoriteEntry),
	/// Drop every favorite with this media id.
	RemoveFavorite(MediaId),
}

impl Session {
	pub fn reduce(mut self, action: SessionAction) -> Self {
		match action {
			SessionAction::SetUser(user) => {
				match &user {
					Some(user) => log::debug!(target: TARGET, "user set to {:?}", user.username),
					None => log::debug!(target: TARGET, "user cleared"),
				}
				self.user = user;
			}
			SessionAction::SetListFavorites(favorites) => {
				log::debug!(target: TARGET, "loaded {} favorites", favorites.len());
				self.favorites = favorites;
			}
			SessionAction::AddFavorite(entry) => {
				self.favorites.insert(0, entry);
			}
			SessionAction::RemoveFavorite(media_id) => {
				self.favorites.retain(|entry| entry.media_id != media_id);
			}
		}
		self
	}

	pub fn is_signed_in(&self) -> bool {
		self.user.is_some()
	}

	pub fn favorite(&self, media_id: &MediaId) -> Option<&FavoriteEntry> {
		self.favorites.iter().find(|entry| &entry.media_id == media_id)
	}

	pub fn is_favorite(&self, media_id: &MediaId) -> bool {
		self.favorite(media_id).is_some()
	}

	/// Whether `user` is still the one signed in, with the same token.
	pub fn is_current(&self, user: &UserInfo) -> bool {
		self.user
			.as_ref()
			.is_some_and(|current| current.id == user.id && current.token == user.token)
	}
}

impl Reducer<Session> for SessionAction {
	fn apply(self, state: Rc<Session>) -> Rc<Session> {
		Rc::new((*state).clone().reduce(self))
	}
}

/// An action issued on behalf of one user, typically once a backend call returns.
///
/// It is dropped if that user has signed out, or been replaced, in the meantime.
#[derive(Debug, Clone, PartialEq)]
pub struct ForUser {
	pub user: UserInfo,
	pub action: SessionAction,
}

impl SessionAction {
	/// The action for a sign-in response body. This is the boundary where an
	/// external sign-in flow hands its payload to the store; malformed payloads
	/// never reach [`Session::reduce`].
	pub fn sign_in(payload: &str) -> Result<Self, SessionError> {
		Ok(Self::SetUser(Some(UserInfo::parse(payload)?)))
	}

	pub fn for_user(self, user: UserInfo) -> ForUser {
		ForUser { user, action: self }
	}
}

impl Reducer<Session> for ForUser {
	fn apply(self, state: Rc<Session>) -> Rc<Session> {
		if !state.is_current(&self.user) {
			log::debug!(target: TARGET, "dropping result for stale user {:?}", self.user.username);
			return state;
		}
		self.action.apply(state)
	}
}
