//! Named stylesheet registry with custom template support.

use minijinja::{context, Environment, Error};

use crate::theme::Theme;

type BuiltinFn = fn(&Theme) -> String;

/// Builtin generators addressable by name. Only the zero-argument
/// generators appear here; the parameterized ones need call-site
/// arguments and are invoked directly on [`Theme`].
const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("tree_widget", Theme::tree_widget_stylesheet),
    ("status_bar", Theme::status_bar_stylesheet),
    ("tool_button", Theme::tool_button_stylesheet),
    ("formula_hint", Theme::formula_hint_stylesheet),
    ("completer_popup", Theme::completer_popup_stylesheet),
    ("toolbar", Theme::toolbar_stylesheet),
    ("menu", Theme::menu_stylesheet),
    ("error_text", Theme::error_text_stylesheet),
    ("normal_text", Theme::normal_text_stylesheet),
];

/// Registry of named stylesheets for a fixed theme.
///
/// Builtin generators are addressable by name, so widget code can look
/// stylesheets up from configuration. Custom QSS templates are compiled
/// once by minijinja and rendered against the theme, whose fields are
/// addressable as `{{ theme.bg_dark_primary }}`,
/// `{{ theme.base_font.family }}`, and so on.
///
/// # Example
///
/// ```rust
/// use hmi_theme::{StylesheetRegistry, Theme};
///
/// let mut registry = StylesheetRegistry::new(Theme::dark());
/// let builtin = registry.render_builtin("status_bar").unwrap();
/// assert!(builtin.contains("#2c3e50"));
///
/// registry
///     .add_template("badge", "QLabel { color: {{ theme.accent_green }}; }")
///     .unwrap();
/// assert_eq!(
///     registry.render("badge").unwrap(),
///     "QLabel { color: #34a853; }"
/// );
/// ```
pub struct StylesheetRegistry {
    theme: Theme,
    env: Environment<'static>,
}

impl StylesheetRegistry {
    /// Creates a registry bound to the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            env: Environment::new(),
        }
    }

    /// The theme this registry renders against.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders a builtin stylesheet by name, or `None` for an unknown
    /// name.
    #[must_use]
    pub fn render_builtin(&self, name: &str) -> Option<String> {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, generator)| generator(&self.theme))
    }

    /// Names of all builtin stylesheets.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|(name, _)| *name)
    }

    /// Registers a custom QSS template.
    ///
    /// The template is compiled immediately; errors are returned if the
    /// syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template against the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not registered or
    /// rendering fails.
    pub fn render(&self, name: &str) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(context! { theme => &self.theme })
    }
}
