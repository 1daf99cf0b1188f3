use crate::{
	api::{self, favorites::NewFavorite},
	session::{FavoriteEntry, Session, SessionAction},
	util::spawn_request,
};
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yewdux::prelude::use_store;

static TARGET: &str = "favorite_button";

#[derive(Properties, PartialEq)]
pub struct FavoriteButtonProps {
	pub entry: FavoriteEntry,
}

/// Adds or removes a media item from the user's favorites, saving the change to
/// the backend before updating the store.
///
/// The store tolerates duplicates, so this is where they are kept out: an item
/// which is already a favorite can only be removed.
#[function_component]
pub fn FavoriteButton(props: &FavoriteButtonProps) -> Html {
	let (session, dispatch) = use_store::<Session>();
	let pending = use_state_eq(|| false);
	let is_mounted = use_is_mounted();
	let media_id = props.entry.media_id.clone();
	let saved = session.favorite(&media_id).cloned();
	let is_favorite = saved.is_some();

	let onclick = {
		let entry = props.entry.clone();
		let pending = pending.clone();
		Callback::from(move |_: MouseEvent| {
			let Some(user) = session.user.clone() else {
				log::warn!(target: TARGET, "cannot update favorite {} while signed out", entry.media_id);
				return;
			};
			let client = match api::Client::for_user(Some(&user)) {
				Ok(client) => client,
				Err(err) => {
					log::error!(target: TARGET, "cannot update favorite {}: {err:?}", entry.media_id);
					return;
				}
			};
			pending.set(true);
			let dispatch = dispatch.clone();
			let pending = pending.clone();
			let is_mounted = is_mounted.clone();
			// Removing a favorite unmounts the card this button sits on.
			let done = move || {
				if (*is_mounted)() {
					pending.set(false);
				}
			};
			match saved.clone() {
				Some(saved) => {
					let media_id = saved.media_id.clone();
					spawn_request(TARGET, "remove favorite", async move {
						// Entries which never reached the backend only live in the store.
						let result = match &saved.id {
							Some(favorite_id) => client.remove_favorite(favorite_id).await,
							None => Ok(()),
						};
						done();
						result?;
						dispatch.apply(SessionAction::RemoveFavorite(media_id).for_user(user));
						Ok(())
					});
				}
				None => {
					let request = NewFavorite::from(&entry);
					spawn_request(TARGET, "add favorite", async move {
						let result = client.add_favorite(&request).await;
						done();
						dispatch.apply(SessionAction::AddFavorite(result?).for_user(user));
						Ok(())
					});
				}
			}
		})
	};

	let (class, label) = match is_favorite {
		true => ("btn btn-outline-danger btn-sm", "Remove"),
		false => ("btn btn-outline-primary btn-sm", "Add to favorites"),
	};
	html! {
		<button {class} {onclick} disabled={*pending}>{label}</button>
	}
}
