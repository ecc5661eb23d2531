//! Styling/build configuration
//!
//! Serializes to the exact shape the CSS build tool reads:
//!
//! ```json
//! {
//!   "content": ["./src/**/*.{html,js,svelte,ts}", ...],
//!   "plugins": ["flowbite/plugin"],
//!   "darkMode": "class",
//!   "theme": { "extend": { "colors": { "primary": { "50": "#FFDBDB", ... } } } }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::color::ColorRamp;
use crate::error::{Result, ThemeError};

/// Dark-mode toggle strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
	/// Toggled by a `dark` class on an ancestor element (the shipped strategy)
	#[default]
	Class,
	/// Follows the `prefers-color-scheme` media query
	Media,
}

/// Theme configuration
///
/// Declares the file globs scanned for utility-class usage, the plugin list,
/// the dark-mode strategy, and the primary color ramp. Consumed by the build
/// tool; no runtime behavior beyond [`ThemeConfig::to_css_variables`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
	/// Files scanned for utility class usage
	pub content: Vec<String>,
	/// Plugin list
	pub plugins: Vec<String>,
	#[serde(rename = "darkMode")]
	pub dark_mode: DarkMode,
	theme: ThemeSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct ThemeSection {
	extend: ExtendSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct ExtendSection {
	colors: ColorSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct ColorSection {
	primary: ColorRamp,
}

impl ThemeConfig {
	/// Create a configuration with the given content globs and the shipped
	/// defaults for everything else
	///
	/// # Errors
	///
	/// Returns [`ThemeError::NoContentGlobs`] when `content` is empty.
	pub fn new(content: Vec<String>) -> Result<Self> {
		if content.is_empty() {
			return Err(ThemeError::NoContentGlobs);
		}
		Ok(Self {
			content,
			plugins: Vec::new(),
			dark_mode: DarkMode::default(),
			theme: ThemeSection::default(),
		})
	}

	/// Builder method for the plugin list
	pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
		self.plugins.push(plugin.into());
		self
	}

	/// Builder method for the dark-mode strategy
	pub fn dark_mode(mut self, dark_mode: DarkMode) -> Self {
		self.dark_mode = dark_mode;
		self
	}

	/// Builder method for the primary color ramp
	pub fn primary(mut self, primary: ColorRamp) -> Self {
		self.theme.extend.colors.primary = primary;
		self
	}

	/// The primary color ramp
	pub fn primary_ramp(&self) -> &ColorRamp {
		&self.theme.extend.colors.primary
	}

	/// Render the primary ramp as CSS custom properties
	///
	/// # Example
	///
	/// ```
	/// use washroom_theme::ThemeConfig;
	///
	/// let css = ThemeConfig::default().to_css_variables();
	/// assert!(css.contains("--primary-500: #990000;"));
	/// ```
	pub fn to_css_variables(&self) -> String {
		let mut css = String::from(":root {\n");
		for (step, color) in self.primary_ramp().steps() {
			css.push_str(&format!("  --primary-{step}: {color};\n"));
		}
		css.push('}');
		css
	}
}

impl Default for ThemeConfig {
	/// The shipped configuration: app sources plus the component library,
	/// its plugin, class-based dark mode, and the default red ramp
	fn default() -> Self {
		Self {
			content: vec![
				"./src/**/*.{html,js,svelte,ts}".into(),
				"./node_modules/flowbite-svelte/**/*.{html,js,svelte,ts}".into(),
			],
			plugins: vec!["flowbite/plugin".into()],
			dark_mode: DarkMode::Class,
			theme: ThemeSection::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn default_config_matches_shipped_values() {
		let config = ThemeConfig::default();
		assert_eq!(config.content.len(), 2);
		assert_eq!(config.plugins, vec!["flowbite/plugin"]);
		assert_eq!(config.dark_mode, DarkMode::Class);
		assert_eq!(config.primary_ramp().get(400), Some("#E00000"));
	}

	#[rstest]
	fn serializes_to_build_tool_shape() {
		let json = serde_json::to_value(ThemeConfig::default()).unwrap();
		assert_eq!(json["darkMode"], "class");
		assert_eq!(json["content"][0], "./src/**/*.{html,js,svelte,ts}");
		assert_eq!(json["theme"]["extend"]["colors"]["primary"]["50"], "#FFDBDB");
	}

	#[rstest]
	fn new_rejects_empty_content() {
		let err = ThemeConfig::new(Vec::new()).unwrap_err();
		assert!(matches!(err, ThemeError::NoContentGlobs));
	}

	#[rstest]
	fn builder_composes() {
		let config = ThemeConfig::new(vec!["./app/**/*.rs".into()])
			.unwrap()
			.plugin("forms")
			.dark_mode(DarkMode::Media);

		assert_eq!(config.plugins, vec!["forms"]);
		assert_eq!(config.dark_mode, DarkMode::Media);
	}

	#[rstest]
	fn css_variables_cover_every_step() {
		let css = ThemeConfig::default().to_css_variables();
		for (step, color) in ThemeConfig::default().primary_ramp().steps() {
			assert!(css.contains(&format!("--primary-{step}: {color};")));
		}
		assert!(css.starts_with(":root {"));
		assert!(css.ends_with('}'));
	}
}
