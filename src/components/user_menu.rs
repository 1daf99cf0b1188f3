use crate::{
	config::{MenuEntry, USER_MENU},
	route::Route,
	session::{Session, SessionAction},
};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Whether the user menu is showing, and if so, which element it hangs from.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState<A> {
	Closed,
	Open { anchor: A },
}

impl<A> Default for MenuState<A> {
	fn default() -> Self {
		Self::Closed
	}
}

/// Something the user can pick from the open menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem<'a> {
	Link(&'a MenuEntry),
	SignOut,
}

impl<A> MenuState<A> {
	/// The trigger was clicked.
	pub fn open(self, anchor: A) -> Self {
		Self::Open { anchor }
	}

	/// A click landed outside the menu.
	pub fn close(self) -> Self {
		Self::Closed
	}

	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open { .. })
	}

	pub fn anchor(&self) -> Option<&A> {
		match self {
			Self::Open { anchor } => Some(anchor),
			Self::Closed => None,
		}
	}

	/// Every item on offer: one per link, then sign out. Empty while closed.
	pub fn items<'a>(&self, links: &'a [MenuEntry]) -> Vec<MenuItem<'a>> {
		if !self.is_open() {
			return Vec::new();
		}
		links.iter().map(MenuItem::Link).chain(std::iter::once(MenuItem::SignOut)).collect()
	}

	/// Picking any item closes the menu. Signing out also yields the action
	/// which clears the session user.
	pub fn select(self, item: &MenuItem) -> (Self, Option<SessionAction>) {
		if !self.is_open() {
			return (self, None);
		}
		let action = match item {
			MenuItem::Link(_) => None,
			MenuItem::SignOut => Some(SessionAction::SetUser(None)),
		};
		(Self::Closed, action)
	}
}

/// Inline style placing the dropdown just below its anchor.
fn dropdown_style(anchor: &Element) -> String {
	let rect = anchor.get_bounding_client_rect();
	format!("position: fixed; top: {}px; left: {}px; display: block;", rect.bottom(), rect.left())
}

#[function_component]
pub fn UserMenu() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let menu = use_state(MenuState::<Element>::default);
	let trigger = use_node_ref();

	let Some(user) = &session.user else {
		return html! {};
	};

	let toggle = {
		let menu = menu.clone();
		let trigger = trigger.clone();
		Callback::from(move |_: MouseEvent| {
			if let Some(anchor) = trigger.cast::<Element>() {
				menu.set((*menu).clone().open(anchor));
			}
		})
	};
	let close = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| menu.set((*menu).clone().close()))
	};
	let select = {
		let menu = menu.clone();
		move |item: MenuItem<'static>| {
			let menu = menu.clone();
			let dispatch = dispatch.clone();
			Callback::from(move |_: MouseEvent| {
				let (next, action) = (*menu).clone().select(&item);
				menu.set(next);
				if let Some(action) = action {
					log::info!(target: "user_menu", "signing out");
					dispatch.apply(action);
				}
			})
		}
	};

	let items = menu.items(USER_MENU).into_iter().enumerate().map(|(idx, item)| match item {
		MenuItem::Link(entry) => html! {
			<li key={idx} onclick={select(item)}>
				<Link<Route> classes={"dropdown-item"} to={entry.path}>
					<span class="material-icons me-2">{entry.icon}</span>
					<span class="text-uppercase">{entry.display}</span>
				</Link<Route>>
			</li>
		},
		MenuItem::SignOut => html! {
			<li key={idx}>
				<button class="dropdown-item" onclick={select(item)}>
					<span class="material-icons me-2">{"logout"}</span>
					<span class="text-uppercase">{"sign out"}</span>
				</button>
			</li>
		},
	});

	html! {<>
		<h6 class="user-menu-trigger mb-0" style="cursor: pointer; user-select: none;" ref={trigger} onclick={toggle}>
			{&user.display_name}
		</h6>
		if let Some(anchor) = menu.anchor() {<>
			<div class="user-menu-backdrop" style="position: fixed; inset: 0;" onclick={close}></div>
			<ul class="dropdown-menu p-0" style={dropdown_style(anchor)}>
				{for items}
			</ul>
		</>}
	</>}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn starts_closed() {
		let menu = MenuState::<&str>::default();
		assert!(!menu.is_open());
		assert_eq!(menu.anchor(), None);
		assert!(menu.items(USER_MENU).is_empty());
	}

	#[test]
	fn open_exposes_links_and_sign_out() {
		let menu = MenuState::Closed.open("trigger");
		assert_eq!(menu.anchor(), Some(&"trigger"));
		let items = menu.items(USER_MENU);
		assert_eq!(items.len(), USER_MENU.len() + 1);
		assert_eq!(items.last(), Some(&MenuItem::SignOut));
		assert_eq!(items[0], MenuItem::Link(&USER_MENU[0]));
	}

	#[test]
	fn click_outside_closes() {
		let menu = MenuState::Closed.open(1).close();
		assert_eq!(menu, MenuState::Closed);
	}

	#[test]
	fn link_closes_without_action() {
		let menu = MenuState::Closed.open(1);
		let (menu, action) = menu.select(&MenuItem::Link(&USER_MENU[1]));
		assert_eq!(menu, MenuState::Closed);
		assert_eq!(action, None);
	}

	#[test]
	fn sign_out_closes_and_clears_user() {
		let signed_in = Session::default().reduce(SessionAction::SetUser(Some(crate::session::UserInfo {
			id: "1".into(),
			username: "tkflix".into(),
			display_name: "Tk".into(),
			token: Some("t".into()),
			created_at: None,
		})));
		let menu = MenuState::Closed.open(1);
		let (menu, action) = menu.select(&MenuItem::SignOut);
		assert!(!menu.is_open());
		let session = signed_in.reduce(action.expect("sign out clears the user"));
		assert_eq!(session.user, None);
	}

	#[test]
	fn closed_menu_ignores_selection() {
		let (menu, action) = MenuState::<u8>::Closed.select(&MenuItem::SignOut);
		assert_eq!(menu, MenuState::Closed);
		assert_eq!(action, None);
	}
}
