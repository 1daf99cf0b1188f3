use super::FavoriteButton;
use crate::{media::poster_path, session::FavoriteEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FavoriteCardProps {
	pub entry: FavoriteEntry,
}

#[function_component]
pub fn FavoriteCard(props: &FavoriteCardProps) -> Html {
	let entry = &props.entry;
	let poster = match &entry.media_poster {
		Some(fragment) => html! {
			<img class="card-img-top" src={poster_path(fragment)} alt={entry.media_title.clone()} />
		},
		None => html! {
			<div class="card-img-top bg-secondary" style="aspect-ratio: 2 / 3;"></div>
		},
	};
	html! {
		<div class="card">
			{poster}
			<div class="card-body">
				<h5 class="card-title">{&entry.media_title}</h5>
				<p class="card-text">
					<span class="badge bg-warning text-dark">{format!("{:.1}", entry.media_rate)}</span>
					<span class="ms-2 text-uppercase">{entry.media_type.as_str()}</span>
				</p>
				<FavoriteButton entry={entry.clone()} />
			</div>
		</div>
	}
}
