use crate::{
	components::{AuthSwitch, FavoriteCard},
	session::Session,
};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component]
pub fn Favorites() -> Html {
	let favorites = use_selector(|session: &Session| session.favorites.clone());
	let cards = favorites.iter().enumerate().map(|(idx, entry)| {
		// Duplicates are possible, so the media id alone is not a unique key.
		html! { <FavoriteCard key={format!("{idx}-{}", entry.media_id)} entry={entry.clone()} /> }
	});
	html! {
		<div class="container py-4">
			<h2 class="text-uppercase">{format!("Your favorites ({})", favorites.len())}</h2>
			<AuthSwitch
				identified={html! {
					<div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); grid-gap: 0.75em;">
						{for cards}
					</div>
				}}
				anonymous={html! {
					<p>{"Sign in to see your favorites."}</p>
				}}
			/>
		</div>
	}
}
