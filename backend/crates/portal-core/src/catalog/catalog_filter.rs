use crate::{AppCategory, AppLink, AppStatus, BuildType};

/// Dashboard search box plus the three filter dropdowns; all conditions must hold
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub category: Option<AppCategory>,
    pub status: Option<AppStatus>,
    pub build_type: BuildType,
}

impl CatalogFilter {
    pub fn matches(&self, app: &AppLink) -> bool {
        self.matches_search(app)
            && self.category.is_none_or(|c| app.category == c)
            && self.status.is_none_or(|s| app.status == s)
            && self.build_type.matches(app.is_custom_build)
    }

    pub fn apply<'a>(&self, apps: &'a [AppLink]) -> Vec<&'a AppLink> {
        apps.iter().filter(|app| self.matches(app)).collect()
    }

    /// Dropdowns not set to "all". The search box does not count.
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.build_type != BuildType::All)
    }

    fn matches_search(&self, app: &AppLink) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                app.name.to_lowercase().contains(&query)
                    || app.description.to_lowercase().contains(&query)
            }
        }
    }
}
