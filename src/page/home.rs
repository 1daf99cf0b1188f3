use crate::{components::AuthSwitch, route::Route, session::Session};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component]
pub fn Home() -> Html {
	let favorite_count = use_selector(|session: &Session| session.favorites.len());
	html! {
		<div class="container py-4">
			<h2>{"tkflix"}</h2>
			<AuthSwitch
				identified={html! {
					<p>
						{format!("You have {} saved favorites. ", *favorite_count)}
						<Link<Route> to={Route::Favorites}>{"View them"}</Link<Route>>
					</p>
				}}
				anonymous={html! {
					<p>{"Sign in to keep a list of your favorite movies and shows."}</p>
				}}
			/>
		</div>
	}
}
