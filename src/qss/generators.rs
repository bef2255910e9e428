//! Stylesheet generators: pure methods on [`Theme`] producing QSS.
//!
//! Every generator depends only on the theme it is called on and its
//! explicit arguments. Nothing is cached and no I/O happens; repeated
//! calls return byte-identical output.

use crate::color::Color;
use crate::theme::Theme;

/// Asset paths interpolated into the project tree stylesheet.
///
/// Paths are embedded verbatim into `url(...)` clauses; no existence
/// check is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchIcons {
    /// Expand (plus) icon shown on collapsed items with children.
    pub expand: String,
    /// Collapse (minus) icon shown on expanded items with children.
    pub collapse: String,
    /// Vertical hierarchy line.
    pub vline: String,
    /// T-junction branch line for items with siblings below.
    pub tee: String,
    /// L-corner branch line for the last item in a group.
    pub corner: String,
}

impl Theme {
    /// Stylesheet for the plain tree widgets used in docking windows.
    #[must_use]
    pub fn tree_widget_stylesheet(&self) -> String {
        format!(
            r#"QTreeWidget {{
    background-color: {bg};
    color: {text};
    border: 1px solid {border};
}}
QTreeWidget::item:selected {{
    background-color: transparent;
    color: {text};
}}
QTreeWidget::item:hover {{
    background-color: {hover};
    color: {text};
}}
"#,
            bg = self.bg_dark_primary,
            text = self.text_primary,
            border = self.border_dark,
            hover = self.hover,
        )
    }

    /// Stylesheet for the project tree, including branch hierarchy lines.
    ///
    /// The five asset paths in `icons` are embedded verbatim.
    #[must_use]
    pub fn project_tree_stylesheet(&self, icons: &BranchIcons) -> String {
        format!(
            r#"QTreeWidget {{
    border: none;
    background-color: {bg};
    alternate-background-color: {bg};
    color: {text};
    gridline-color: {bg};
    outline: none;
    margin-left: 0px;
    show-decoration-selected: 1;
}}
QTreeWidget::item {{
    padding: 4px 2px;
    margin-left: 0px;
    color: {text};
    min-height: 20px;
}}
QTreeWidget::item:selected {{
    background-color: transparent;
    color: {text};
}}
QTreeWidget::item:hover {{
    background-color: {hover};
    color: {text};
}}

/* Default branch styling */
QTreeWidget::branch {{
    width: 12px;
    height: 12px;
    padding-top: 7px;
    padding-left: 0px;
    padding-right: 2px;
    padding-bottom: 7px;
    background-color: transparent;
}}

/* Branch with expand button (collapsed with children) */
QTreeWidget::branch:has-children:!has-siblings:closed {{
    image: url("{expand}");
    border-image: url("{corner}") 0;
}}
QTreeWidget::branch:closed:has-children:has-siblings {{
    image: url("{expand}");
    border-image: url("{tee}") 0;
}}

/* Branch with collapse button (expanded with children) */
QTreeWidget::branch:open:has-children:!has-siblings {{
    image: url("{collapse}");
    border-image: url("{corner}") 0;
}}
QTreeWidget::branch:open:has-children:has-siblings {{
    image: url("{collapse}");
    border-image: url("{tee}") 0;
}}

/* Vertical line for items that have more siblings below */
QTreeWidget::branch:has-siblings:!adjoins-item {{
    border-image: url("{vline}") 0;
}}

/* T-junction: vertical plus horizontal line */
QTreeWidget::branch:has-siblings:adjoins-item {{
    border-image: url("{tee}") 0;
}}

/* L-corner for the last item in a group */
QTreeWidget::branch:!has-siblings:adjoins-item {{
    border-image: url("{corner}") 0;
}}

QHeaderView::section {{
    background-color: {header_bg};
    color: {text};
    padding: 3px;
    border: 1px solid {header_border};
}}
"#,
            bg = self.bg_dark_secondary,
            text = self.text_primary,
            hover = self.hover,
            header_bg = self.bg_dark_quaternary,
            header_border = self.border_header,
            expand = icons.expand,
            collapse = icons.collapse,
            vline = icons.vline,
            tee = icons.tee,
            corner = icons.corner,
        )
    }

    /// Stylesheet for the status bar and its labels.
    #[must_use]
    pub fn status_bar_stylesheet(&self) -> String {
        format!(
            r#"QStatusBar {{
    background-color: {bg};
    color: {text};
}}
QStatusBar::item {{
    border: none;
}}
QLabel {{
    color: {text};
    padding-left: 2px;
    padding-right: 2px;
}}
"#,
            bg = self.bg_status_bar,
            text = self.text_primary,
        )
    }

    /// Stylesheet for tool buttons with on/off state properties.
    #[must_use]
    pub fn tool_button_stylesheet(&self) -> String {
        format!(
            r#"QToolButton {{
    border-radius: 3px;
    padding: 3px;
}}
QToolButton[state="on"] {{
    background-color: {on_bg};
    color: {text};
    border: 1px solid {on_border};
}}
QToolButton[state="off"] {{
    background-color: {off_bg};
    color: {dark_text};
    border: 1px solid {off_border};
}}
QToolButton:hover {{
    background-color: {hover};
}}
QToolButton:checked, QToolButton:pressed {{
    background-color: #707070;
    border: 1px solid {border_light};
}}
QToolButton:checked:hover {{
    background-color: #808080;
}}
"#,
            on_bg = self.accent_green,
            on_border = self.accent_green_dark,
            off_bg = self.accent_yellow,
            off_border = self.accent_yellow_dark,
            text = self.text_primary,
            dark_text = self.text_dark,
            hover = self.hover,
            border_light = self.border_light,
        )
    }

    /// Declarations for formula hint popups. Applied directly to the
    /// popup widget, so there is no selector wrapper.
    #[must_use]
    pub fn formula_hint_stylesheet(&self) -> String {
        format!(
            "background-color: {bg};\n\
             border: 1px solid {border};\n\
             padding: 4px;\n\
             font-size: {size}pt;\n\
             color: {text};\n",
            bg = self.bg_dark_quaternary,
            border = self.border_medium,
            size = self.hint_font.size,
            text = self.text_primary,
        )
    }

    /// Stylesheet for autocomplete/completer popups.
    #[must_use]
    pub fn completer_popup_stylesheet(&self) -> String {
        format!(
            r#"QListWidget {{
    background-color: {bg};
    border: 1px solid {border};
}}
QListWidget::item {{
    color: {text};
}}
QListWidget::item:selected {{
    background-color: transparent;
    color: {text};
}}
QListWidget::item:hover {{
    background-color: {hover};
    color: {text};
}}
"#,
            bg = self.bg_spreadsheet,
            border = self.border_medium,
            text = self.text_primary,
            hover = self.hover,
        )
    }

    /// Background color for a spreadsheet cell.
    ///
    /// Selection wins over the header state, which wins over the default
    /// cell background.
    #[must_use]
    pub fn spreadsheet_cell_color(&self, selected: bool, header: bool) -> Color {
        if selected {
            self.selection_highlight_alt
        } else if header {
            self.bg_dark_quaternary
        } else {
            self.bg_spreadsheet
        }
    }

    /// Border color for spreadsheet cells.
    #[must_use]
    pub fn spreadsheet_border_color(&self) -> Color {
        self.border_medium
    }

    /// A horizontal two-stop linear gradient expression.
    #[must_use]
    pub fn gradient_qss(&self, color1: Color, color2: Color) -> String {
        format!(
            "qlineargradient(x1:0, y1:0, x2:1, y2:0, stop:0 {}, stop:1 {})",
            color1, color2
        )
    }

    /// Declarations for a color picker button showing `color`.
    ///
    /// Text contrast is chosen from the background brightness, so a
    /// swatch stays labeled whatever color it shows.
    #[must_use]
    pub fn color_button_stylesheet(&self, color: Color, selected: bool) -> String {
        let border_color = if selected {
            self.debug_border
        } else {
            self.border_medium
        };
        let border_width = if selected { "2px" } else { "1px" };
        let text_color = self.text_color_for(color);
        format!(
            "background-color: {bg};\n\
             color: {text};\n\
             border: {width} solid {border};\n\
             padding: 2px;\n\
             border-radius: 2px;\n",
            bg = color,
            text = text_color,
            width = border_width,
            border = border_color,
        )
    }

    /// Declarations for pattern preview widgets. `None` falls back to
    /// the primary text color as the swatch background.
    #[must_use]
    pub fn pattern_widget_stylesheet(&self, color: Option<Color>) -> String {
        let bg = color.unwrap_or(self.text_primary);
        format!(
            "background-color: {bg};\nborder: 1px solid {border};\n",
            bg = bg,
            border = self.border_medium,
        )
    }

    /// Declaration for error text.
    #[must_use]
    pub fn error_text_stylesheet(&self) -> String {
        format!("color: {};", self.error)
    }

    /// Declaration for normal text.
    #[must_use]
    pub fn normal_text_stylesheet(&self) -> String {
        format!("color: {};", self.text_primary)
    }

    /// Stylesheet for toolbars and their embedded controls.
    #[must_use]
    pub fn toolbar_stylesheet(&self) -> String {
        format!(
            r#"QToolBar {{
    background-color: {bg};
    border: 1px solid {border};
    spacing: 3px;
    padding: 2px;
}}
QToolBar::separator {{
    background-color: {border};
    width: 1px;
    margin: 4px;
}}
QToolBar QSpinBox, QToolBar QComboBox {{
    min-height: 24px;
}}
"#,
            bg = self.bg_dark_secondary,
            border = self.border_dark,
        )
    }

    /// Stylesheet for menu bars, menus, and combo box popups.
    #[must_use]
    pub fn menu_stylesheet(&self) -> String {
        format!(
            r#"QMenuBar {{
    background-color: {bg};
    color: {text};
}}
QMenuBar::item:selected {{
    background-color: {hover};
}}
QMenu {{
    background-color: {bg};
    color: {text};
    border: 1px solid {border};
}}
QMenu::item:selected {{
    background-color: {hover};
    color: {text};
}}
QComboBox QAbstractItemView {{
    background-color: {bg};
    color: {text};
    selection-background-color: {hover};
    selection-color: {text};
    outline: none;
}}
QPushButton:hover {{
    background-color: {hover};
}}
"#,
            bg = self.bg_dark_secondary,
            text = self.text_primary,
            border = self.border_dark,
            hover = self.hover,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_widget_uses_primary_background() {
        let qss = Theme::dark().tree_widget_stylesheet();
        assert!(qss.contains("background-color: #2b2b2b;"));
        assert!(qss.contains("border: 1px solid #444444;"));
        assert!(qss.contains("QTreeWidget::item:hover"));
    }

    #[test]
    fn test_project_tree_embeds_icon_paths_verbatim() {
        let icons = BranchIcons {
            expand: "/tmp/assets/add.svg".into(),
            collapse: "/tmp/assets/subtract.svg".into(),
            vline: "/tmp/assets/vline.svg".into(),
            tee: "/tmp/assets/branch-more.svg".into(),
            corner: "/tmp/assets/branch-end.svg".into(),
        };
        let qss = Theme::dark().project_tree_stylesheet(&icons);
        assert!(qss.contains(r#"image: url("/tmp/assets/add.svg");"#));
        assert!(qss.contains(r#"image: url("/tmp/assets/subtract.svg");"#));
        assert!(qss.contains(r#"border-image: url("/tmp/assets/vline.svg") 0;"#));
        assert!(qss.contains(r#"border-image: url("/tmp/assets/branch-end.svg") 0;"#));
    }

    #[test]
    fn test_project_tree_default_icons_are_empty_urls() {
        let qss = Theme::dark().project_tree_stylesheet(&BranchIcons::default());
        assert!(qss.contains(r#"image: url("");"#));
    }

    #[test]
    fn test_status_bar_colors() {
        let qss = Theme::dark().status_bar_stylesheet();
        assert!(qss.contains("background-color: #2c3e50;"));
        assert!(qss.contains("color: #ffffff;"));
    }

    #[test]
    fn test_tool_button_states() {
        let qss = Theme::dark().tool_button_stylesheet();
        assert!(qss.contains(r#"QToolButton[state="on"]"#));
        assert!(qss.contains("background-color: #34a853;"));
        assert!(qss.contains(r#"QToolButton[state="off"]"#));
        assert!(qss.contains("background-color: #fbbc05;"));
        assert!(qss.contains("border: 1px solid #2e7d32;"));
    }

    #[test]
    fn test_formula_hint_uses_hint_font_size() {
        let mut theme = Theme::dark();
        theme.hint_font.size = 12;
        assert!(theme.formula_hint_stylesheet().contains("font-size: 12pt;"));
    }

    #[test]
    fn test_spreadsheet_cell_color_priority() {
        let theme = Theme::dark();
        // Selected wins even when the cell is also a header.
        assert_eq!(
            theme.spreadsheet_cell_color(true, true),
            theme.selection_highlight_alt
        );
        assert_eq!(
            theme.spreadsheet_cell_color(true, false),
            theme.selection_highlight_alt
        );
        assert_eq!(
            theme.spreadsheet_cell_color(false, true),
            theme.bg_dark_quaternary
        );
        assert_eq!(
            theme.spreadsheet_cell_color(false, false),
            theme.bg_spreadsheet
        );
    }

    #[test]
    fn test_gradient_expression() {
        let theme = Theme::dark();
        let qss = theme.gradient_qss(theme.gradient_1, theme.gradient_2);
        assert_eq!(
            qss,
            "qlineargradient(x1:0, y1:0, x2:1, y2:0, stop:0 #d0cece, stop:1 #596978)"
        );
    }

    #[test]
    fn test_color_button_picks_contrasting_text() {
        let theme = Theme::dark();
        let on_white = theme.color_button_stylesheet(Color::rgb(255, 255, 255), false);
        assert!(on_white.contains("color: #000000;"));
        let on_black = theme.color_button_stylesheet(Color::rgb(0, 0, 0), false);
        assert!(on_black.contains("color: #ffffff;"));
    }

    #[test]
    fn test_color_button_selected_border() {
        let theme = Theme::dark();
        let selected = theme.color_button_stylesheet(Color::rgb(0x34, 0xa8, 0x53), true);
        assert!(selected.contains("border: 2px solid transparent;"));
        let idle = theme.color_button_stylesheet(Color::rgb(0x34, 0xa8, 0x53), false);
        assert!(idle.contains("border: 1px solid #555555;"));
    }

    #[test]
    fn test_pattern_widget_fallback_background() {
        let theme = Theme::dark();
        let qss = theme.pattern_widget_stylesheet(None);
        assert!(qss.contains("background-color: #ffffff;"));
        let qss = theme.pattern_widget_stylesheet(Some(Color::rgb(1, 2, 3)));
        assert!(qss.contains("background-color: #010203;"));
    }

    #[test]
    fn test_text_declarations() {
        let theme = Theme::dark();
        assert_eq!(theme.error_text_stylesheet(), "color: #ff0000;");
        assert_eq!(theme.normal_text_stylesheet(), "color: #ffffff;");
    }

    #[test]
    fn test_generators_are_deterministic() {
        let theme = Theme::dark();
        let icons = BranchIcons::default();
        assert_eq!(
            theme.tree_widget_stylesheet(),
            theme.tree_widget_stylesheet()
        );
        assert_eq!(
            theme.project_tree_stylesheet(&icons),
            theme.project_tree_stylesheet(&icons)
        );
        assert_eq!(theme.menu_stylesheet(), theme.menu_stylesheet());
        assert_eq!(theme.toolbar_stylesheet(), theme.toolbar_stylesheet());
    }
}
