//! Mirrors the session token into persistent storage.
//!
//! The [`super::Session`] reducer never touches storage. Instead the app observes
//! the current user and hands every change to a [`TokenSync`].
use super::UserInfo;
use crate::config::TOKEN_STORAGE_KEY;
use gloo_storage::{LocalStorage, Storage};

static TARGET: &str = "session::persist";

/// Somewhere the session token outlives a page load.
pub trait TokenStorage {
	fn get(&self) -> Option<String>;
	fn set(&self, token: &str);
	fn delete(&self);
}

/// Browser local storage under [`TOKEN_STORAGE_KEY`].
///
/// The token is stored as a raw string rather than json, so other clients of the
/// same backend can read it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
	fn get(&self) -> Option<String> {
		LocalStorage::raw().get_item(TOKEN_STORAGE_KEY).ok().flatten()
	}

	fn set(&self, token: &str) {
		if let Err(err) = LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token) {
			log::error!(target: TARGET, "failed to persist session token: {err:?}");
		}
	}

	fn delete(&self) {
		LocalStorage::delete(TOKEN_STORAGE_KEY);
	}
}

/// Writes the token of `user` to storage, or clears storage when signed out.
/// A user without a token leaves whatever is stored untouched.
pub fn sync_token(user: Option<&UserInfo>, storage: &impl TokenStorage) {
	match user {
		None => {
			log::debug!(target: TARGET, "clearing session token");
			storage.delete();
		}
		Some(UserInfo { token: Some(token), .. }) => {
			log::debug!(target: TARGET, "persisting session token");
			storage.set(token);
		}
		Some(_) => {}
	}
}

/// The token to authenticate backend requests with: the one the user signed in
/// with, or failing that, the one left over from an earlier visit.
pub fn resolve_token(user: Option<&UserInfo>, storage: &impl TokenStorage) -> Option<String> {
	user.and_then(|user| user.token.clone()).or_else(|| storage.get())
}

/// Observes the session user and calls [`sync_token`] whenever it changes.
///
/// The user present at construction counts as already observed, so a token
/// persisted by a previous visit survives start-up while no user is loaded.
pub struct TokenSync<S> {
	storage: S,
	last: Option<UserInfo>,
}

impl<S: TokenStorage> TokenSync<S> {
	pub fn new(storage: S, current: Option<UserInfo>) -> Self {
		Self { storage, last: current }
	}

	pub fn observe(&mut self, user: Option<&UserInfo>) {
		if self.last.as_ref() == user {
			return;
		}
		sync_token(user, &self.storage);
		self.last = user.cloned();
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::session::{Session, SessionAction};
	use std::cell::RefCell;

	#[derive(Default)]
	struct MemoryStorage(RefCell<Option<String>>);
	impl TokenStorage for MemoryStorage {
		fn get(&self) -> Option<String> {
			self.0.borrow().clone()
		}

		fn set(&self, token: &str) {
			*self.0.borrow_mut() = Some(token.to_owned());
		}

		fn delete(&self) {
			*self.0.borrow_mut() = None;
		}
	}

	fn user(token: Option<&str>) -> UserInfo {
		UserInfo {
			id: "1".into(),
			username: "tkflix".into(),
			display_name: "Tk".into(),
			token: token.map(str::to_owned),
			created_at: None,
		}
	}

	/// Runs an action through the reducer and the token observer, as the app does.
	fn dispatch(state: Session, sync: &mut TokenSync<MemoryStorage>, action: SessionAction) -> Session {
		let state = state.reduce(action);
		sync.observe(state.user.as_ref());
		state
	}

	#[test]
	fn sign_out_clears_token() {
		let mut sync = TokenSync::new(MemoryStorage::default(), None);
		let state = dispatch(Session::default(), &mut sync, SessionAction::SetUser(Some(user(Some("abc")))));
		assert_eq!(sync.storage().get().as_deref(), Some("abc"));

		dispatch(state, &mut sync, SessionAction::SetUser(None));
		assert_eq!(sync.storage().get(), None);
	}

	#[test]
	fn new_token_overwrites() {
		let mut sync = TokenSync::new(MemoryStorage::default(), None);
		let state = dispatch(Session::default(), &mut sync, SessionAction::SetUser(Some(user(Some("old")))));
		dispatch(state, &mut sync, SessionAction::SetUser(Some(user(Some("new")))));
		assert_eq!(sync.storage().get().as_deref(), Some("new"));
	}

	#[test]
	fn user_without_token_keeps_stored() {
		let storage = MemoryStorage::default();
		storage.set("kept");
		let mut sync = TokenSync::new(storage, None);
		dispatch(Session::default(), &mut sync, SessionAction::SetUser(Some(user(None))));
		assert_eq!(sync.storage().get().as_deref(), Some("kept"));
	}

	#[test]
	fn startup_keeps_previous_token() {
		let storage = MemoryStorage::default();
		storage.set("previous");
		let mut sync = TokenSync::new(storage, None);
		sync.observe(None);
		assert_eq!(sync.storage().get().as_deref(), Some("previous"));
	}

	#[test]
	fn favorites_do_not_touch_storage() {
		let storage = MemoryStorage::default();
		storage.set("kept");
		let mut sync = TokenSync::new(storage, None);
		dispatch(Session::default(), &mut sync, SessionAction::SetListFavorites(Vec::new()));
		assert_eq!(sync.storage().get().as_deref(), Some("kept"));
	}

	#[test]
	fn resolve_prefers_user_token() {
		let storage = MemoryStorage::default();
		assert_eq!(resolve_token(None, &storage), None);
		storage.set("stored");
		assert_eq!(resolve_token(None, &storage).as_deref(), Some("stored"));
		assert_eq!(resolve_token(Some(&user(None)), &storage).as_deref(), Some("stored"));
		assert_eq!(resolve_token(Some(&user(Some("live"))), &storage).as_deref(), Some("live"));
	}
}
