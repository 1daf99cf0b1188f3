use yew::{html, Component, Context, Html};
use yew_router::Routable;

pub struct Switch<T>(std::marker::PhantomData<T>);
impl<T> Component for Switch<T>
where
	T: Routable + Page + 'static,
{
	type Message = ();
	type Properties = ();

	fn create(_ctx: &Context<Self>) -> Self {
		Self(Default::default())
	}

	fn view(&self, _ctx: &Context<Self>) -> Html {
		html! {
			<yew_router::Switch<T> render={T::html} />
		}
	}
}

/// A routable set of pages which knows how to render each of its variants.
pub trait Page {
	fn html(self) -> Html;

	fn switch() -> Html
	where
		Self: Routable + 'static,
	{
		html! { <Switch<Self> /> }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/favorites")]
	Favorites,
	#[at("/reviews")]
	Reviews,
	#[at("/password-update")]
	PasswordUpdate,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Page for Route {
	fn html(self) -> Html {
		use crate::page;
		match self {
			Self::Home => html! { <page::Home /> },
			Self::Favorites => html! { <page::Favorites /> },
			Self::Reviews => page::placeholder("Reviews"),
			Self::PasswordUpdate => page::placeholder("Password Update"),
			Self::NotFound => html! {
				<h1>{"404: Page not found"}</h1>
			},
		}
	}
}

impl yew::html::IntoPropValue<Option<String>> for Route {
	fn into_prop_value(self) -> Option<String> {
		Some(self.to_path())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn menu_paths() {
		assert_eq!(Route::Favorites.to_path(), "/favorites");
		assert_eq!(Route::Reviews.to_path(), "/reviews");
		assert_eq!(Route::PasswordUpdate.to_path(), "/password-update");
	}
}
