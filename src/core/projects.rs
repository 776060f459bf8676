use serde::Deserialize;

/// One showcased project. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub thumb_src: String,
    pub href: String,
}

impl Project {
    fn builtin(title: &str, slug: &str) -> Self {
        Self {
            title: title.to_string(),
            alt: Some(format!("Screenshot of {}", title)),
            thumb_src: "/images/lab/placeholder.svg".to_string(),
            href: format!("#{}", slug),
        }
    }

    /// Alternate text for the thumbnail; falls back to the title.
    pub fn alt_text(&self) -> &str {
        match self.alt.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => &self.title,
        }
    }
}

pub fn default_projects() -> Vec<Project> {
    [
        ("Project Alpha", "alpha"),
        ("Project Beta", "beta"),
        ("Project Gamma", "gamma"),
        ("Project Delta", "delta"),
        ("Project Epsilon", "epsilon"),
        ("Project Zeta", "zeta"),
    ]
    .into_iter()
    .map(|(title, slug)| Project::builtin(title, slug))
    .collect()
}

/// Parse a JSON array of projects, e.g. from a `data-projects` attribute.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Projects from optional page-supplied JSON, falling back to the built-in
/// list when it is missing, malformed or empty.
pub fn projects_or_default(json: Option<&str>) -> Vec<Project> {
    let Some(json) = json else {
        return default_projects();
    };
    match parse_projects(json) {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            log::warn!("[lab] data-projects is empty; using built-in list");
            default_projects()
        }
        Err(e) => {
            log::warn!("[lab] data-projects is not valid: {}", e);
            default_projects()
        }
    }
}
