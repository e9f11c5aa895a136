//! Breadcrumb trail widget.
//!
//! Stateless string formatting: every crumb gets the base decoration, the last
//! crumb the active one, joined left-to-right with a separator.

use crate::config::EnvConfig;
use crate::core::component::Component;
use crate::core::text::utils::truncate_to_width;

pub struct BreadcrumbsTheme {
    pub crumb: Box<dyn Fn(&str) -> String>,
    pub active: Box<dyn Fn(&str) -> String>,
    pub separator: String,
}

impl BreadcrumbsTheme {
    /// Identity decorations with a single-space separator.
    pub fn plain() -> Self {
        Self {
            crumb: Box::new(str::to_string),
            active: Box::new(str::to_string),
            separator: " ".to_string(),
        }
    }
}

impl Default for BreadcrumbsTheme {
    /// Bold active crumb, unless `NO_COLOR` is set.
    fn default() -> Self {
        if EnvConfig::from_env().no_color {
            return Self::plain();
        }
        Self {
            active: Box::new(|text| format!("\x1b[1m{text}\x1b[22m")),
            ..Self::plain()
        }
    }
}

pub struct Breadcrumbs {
    crumbs: Vec<String>,
    theme: BreadcrumbsTheme,
}

impl Breadcrumbs {
    pub fn new<I, S>(crumbs: I, theme: BreadcrumbsTheme) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            crumbs: crumbs.into_iter().map(Into::into).collect(),
            theme,
        }
    }

    pub fn set_crumbs<I, S>(&mut self, crumbs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crumbs = crumbs.into_iter().map(Into::into).collect();
    }
}

impl Component for Breadcrumbs {
    fn render(&mut self, width: usize) -> Vec<String> {
        if self.crumbs.is_empty() {
            return vec![String::new()];
        }

        let last = self.crumbs.len() - 1;
        let mut line = String::new();
        for (idx, crumb) in self.crumbs.iter().enumerate() {
            if idx > 0 {
                line.push_str(&self.theme.separator);
            }
            if idx == last {
                line.push_str(&(self.theme.active)(crumb));
            } else {
                line.push_str(&(self.theme.crumb)(crumb));
            }
        }

        vec![truncate_to_width(&line, width, "", false)]
    }
}
