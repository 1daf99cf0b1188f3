use futures_util::Future;

/// Runs a backend call on the browser's event loop. A failure is logged as
/// "failed to {action}" under `target` and otherwise dropped, leaving state as it was.
pub fn spawn_request<F>(target: &'static str, action: &'static str, request: F)
where
	F: Future<Output = anyhow::Result<()>> + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = request.await {
			log::error!(target: target, "failed to {action}: {err:?}");
		}
	});
}
