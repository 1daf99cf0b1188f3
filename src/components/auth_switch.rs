use crate::session::Session;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders `identified` while a user is signed in, otherwise `anonymous`.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let signed_in = use_selector(Session::is_signed_in);
	let content = match *signed_in {
		true => &props.identified,
		false => &props.anonymous,
	};
	content.clone().unwrap_or_default()
}
