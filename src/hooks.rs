use crate::{
	api,
	session::{
		persist::{LocalTokenStorage, TokenSync},
		ForUser, Session, SessionAction, UserInfo,
	},
	util::spawn_request,
};
use yew::prelude::*;
use yewdux::prelude::*;

static TARGET: &str = "hooks";

/// Keeps the token in local storage in step with the session user.
///
/// Whatever user is present on first render is treated as already synced.
#[hook]
pub fn use_token_sync() {
	let user = use_selector(|session: &Session| session.user.clone());
	let sync = use_mut_ref({
		let user = user.clone();
		move || TokenSync::new(LocalTokenStorage, (*user).clone())
	});
	use_effect_with(user, move |user| {
		sync.borrow_mut().observe((**user).as_ref());
	});
}

/// What to do with the favorites list once the session user has changed.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesSync {
	/// Nobody is signed in; the list is emptied immediately.
	Clear(SessionAction),
	/// Fetch this user's list from the backend.
	Fetch(UserInfo),
}

impl FavoritesSync {
	pub fn for_user(user: Option<&UserInfo>) -> Self {
		match user {
			None => Self::Clear(SessionAction::SetListFavorites(Vec::new())),
			Some(user) => Self::Fetch(user.clone()),
		}
	}

	/// The action for a fetch which has completed. It only applies if `user`
	/// is still signed in when it lands.
	pub fn fetched(user: UserInfo, favorites: Vec<crate::session::FavoriteEntry>) -> ForUser {
		SessionAction::SetListFavorites(favorites).for_user(user)
	}
}

/// Reloads the favorites list from the backend whenever the user changes,
/// and empties it on sign out.
#[hook]
pub fn use_favorites_sync() {
	let user = use_selector(|session: &Session| session.user.clone());
	let dispatch = Dispatch::<Session>::new();
	use_effect_with(user, move |user| match FavoritesSync::for_user((**user).as_ref()) {
		FavoritesSync::Clear(action) => dispatch.apply(action),
		FavoritesSync::Fetch(user) => {
			let dispatch = dispatch.clone();
			spawn_request(TARGET, "fetch favorites", async move {
				let favorites = api::Client::for_user(Some(&user))?.list_favorites().await?;
				log::info!(target: TARGET, "fetched {} favorites", favorites.len());
				dispatch.apply(FavoritesSync::fetched(user, favorites));
				Ok(())
			});
		}
	});
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		media::MediaType,
		session::{FavoriteEntry, MediaId},
	};
	use std::rc::Rc;
	use yewdux::store::Reducer;

	fn user(id: &str) -> UserInfo {
		UserInfo {
			id: id.into(),
			username: format!("user-{id}"),
			display_name: id.to_uppercase(),
			token: Some(format!("token-{id}")),
			created_at: None,
		}
	}

	fn entry(media_id: u64) -> FavoriteEntry {
		FavoriteEntry {
			id: Some(format!("fav-{media_id}")),
			media_id: MediaId::from(media_id),
			media_type: MediaType::Movie,
			media_title: format!("movie {media_id}"),
			media_poster: None,
			media_rate: 5.0,
			created_at: None,
			updated_at: None,
		}
	}

	/// Applies the effect's immediate outcome, returning the user a fetch was started for.
	fn on_user_change(state: Rc<Session>) -> (Rc<Session>, Option<UserInfo>) {
		match FavoritesSync::for_user(state.user.as_ref()) {
			FavoritesSync::Clear(action) => (action.apply(state), None),
			FavoritesSync::Fetch(user) => (state, Some(user)),
		}
	}

	fn set_user(state: Rc<Session>, user: Option<UserInfo>) -> Rc<Session> {
		SessionAction::SetUser(user).apply(state)
	}

	#[test]
	fn sign_in_fetches() {
		assert_eq!(FavoritesSync::for_user(Some(&user("a"))), FavoritesSync::Fetch(user("a")));
	}

	#[test]
	fn sign_out_empties_favorites() {
		let state = Rc::new(Session::default().reduce(SessionAction::SetListFavorites(vec![entry(1)])));
		let (state, fetch) = on_user_change(state);
		assert_eq!(fetch, None);
		assert!(state.favorites.is_empty());
	}

	#[test]
	fn fetch_for_current_user_replaces_list() {
		let state = set_user(Rc::new(Session::default()), Some(user("a")));
		let (state, fetch) = on_user_change(state);
		let fetched_for = fetch.expect("signed in users are fetched for");
		let state = FavoritesSync::fetched(fetched_for, vec![entry(1), entry(2)]).apply(state);
		assert_eq!(state.favorites, vec![entry(1), entry(2)]);
	}

	#[test]
	fn late_fetch_after_sign_out_is_dropped() {
		let state = set_user(Rc::new(Session::default()), Some(user("a")));
		let (state, fetch) = on_user_change(state);
		let pending = fetch.unwrap();

		let state = set_user(state, None);
		let (state, _) = on_user_change(state);

		let state = FavoritesSync::fetched(pending, vec![entry(1)]).apply(state);
		assert_eq!(state.user, None);
		assert!(state.favorites.is_empty());
	}

	#[test]
	fn late_fetch_for_previous_user_is_dropped() {
		let state = set_user(Rc::new(Session::default()), Some(user("a")));
		let (state, fetch_a) = on_user_change(state);

		let state = set_user(state, Some(user("b")));
		let (state, fetch_b) = on_user_change(state);
		let state = FavoritesSync::fetched(fetch_b.unwrap(), vec![entry(2)]).apply(state);

		let state = FavoritesSync::fetched(fetch_a.unwrap(), vec![entry(1)]).apply(state);
		assert_eq!(state.favorites, vec![entry(2)]);
	}
}
