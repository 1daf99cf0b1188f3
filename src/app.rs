use crate::{
	components::UserMenu,
	hooks::{use_favorites_sync, use_token_sync},
	route::{Page, Route},
};
use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Link};

#[function_component]
pub fn App() -> Html {
	use_token_sync();
	use_favorites_sync();
	html! {
		<BrowserRouter>
			<Header />
			{ Route::switch() }
		</BrowserRouter>
	}
}

#[function_component]
fn Header() -> Html {
	html! {
		<nav class="navbar navbar-dark bg-dark px-3">
			<Link<Route> classes={"navbar-brand"} to={Route::Home}>{"tkflix"}</Link<Route>>
			<div class="d-flex align-items-center text-light">
				<UserMenu />
			</div>
		</nav>
	}
}
