#[cfg(target_family = "wasm")]
fn main() {
	use tkflix::logging;
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	yew::Renderer::<tkflix::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	tkflix::logging::init();
	log::error!("{} runs in the browser; build it for wasm32-unknown-unknown", env!("CARGO_PKG_NAME"));
}
