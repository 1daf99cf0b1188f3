use yew::prelude::*;

mod favorites;
pub use favorites::*;
mod home;
pub use home::*;

/// A page which has a route but nothing to show yet.
pub fn placeholder(title: &'static str) -> Html {
	html! {
		<div class="container py-4">
			<h2 class="text-uppercase">{title}</h2>
		</div>
	}
}
