use log::LevelFilter;

/// Level from the `TKFLIX_LOG` build variable, `info` when unset or unparsable.
pub fn level() -> LevelFilter {
	parse_level(crate::config::LOG_LEVEL)
}

fn parse_level(value: Option<&str>) -> LevelFilter {
	value.and_then(|value| value.parse().ok()).unwrap_or(LevelFilter::Info)
}

#[cfg(not(target_family = "wasm"))]
pub fn init() {
	if let Err(err) = simplelog::TermLogger::init(
		level(),
		simplelog::Config::default(),
		simplelog::TerminalMode::Mixed,
		simplelog::ColorChoice::Auto,
	) {
		// Only fails when a logger is already installed, which then receives this.
		log::warn!(target: "logging", "logger already initialized: {err}");
	}
}

#[cfg(target_family = "wasm")]
pub mod wasm {
	use log::{Level, LevelFilter, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	#[derive(Debug, Clone, Copy)]
	pub struct Config {
		level: LevelFilter,
		prefer_target: bool,
	}
	impl Default for Config {
		fn default() -> Self {
			Self {
				level: super::level(),
				prefer_target: false,
			}
		}
	}
	impl Config {
		pub fn with_level(mut self, level: LevelFilter) -> Self {
			self.level = level;
			self
		}

		/// Prefix messages with their log target instead of the source location.
		pub fn prefer_target(mut self) -> Self {
			self.prefer_target = true;
			self
		}
	}

	struct ConsoleLogger(Config);
	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= self.0.level
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let origin = match (self.0.prefer_target, record.file(), record.line()) {
				(false, Some(file), Some(line)) => format!("{file}:{line}"),
				_ => record.target().to_owned(),
			};
			let message = JsValue::from_str(&format!("[{}] {origin}: {}", record.level(), record.args()));
			match record.level() {
				Level::Error => web_sys::console::error_1(&message),
				Level::Warn => web_sys::console::warn_1(&message),
				Level::Info => web_sys::console::info_1(&message),
				Level::Debug => web_sys::console::log_1(&message),
				Level::Trace => web_sys::console::debug_1(&message),
			}
		}

		fn flush(&self) {}
	}

	pub fn init(config: Config) {
		let level = config.level;
		if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
			log::set_max_level(level);
		}
	}
}
