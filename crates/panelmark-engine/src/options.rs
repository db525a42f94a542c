/// Knobs for the HTML writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// `class` attribute for `<table>`; `None` omits the attribute.
    pub table_class: Option<String>,
    /// Adds `target="_blank"` to links. `rel="noopener"` is always written.
    pub open_links_in_new_tab: bool,
}

impl RenderOptions {
    pub const DEFAULT_TABLE_CLASS: &'static str = "md-table";

    /// Sets the table class. An empty string means no class attribute.
    #[must_use]
    pub fn with_table_class(mut self, class: Option<String>) -> Self {
        self.table_class = class.filter(|c| !c.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_links_in_new_tab(mut self, enabled: bool) -> Self {
        self.open_links_in_new_tab = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_class: Some(Self::DEFAULT_TABLE_CLASS.to_string()),
            open_links_in_new_tab: true,
        }
    }
}
