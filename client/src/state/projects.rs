//! Dashboard project list and the template catalog.
//!
//! Projects are held in memory only. Creating a project from a template
//! appends an untitled draft; the editor then opens it by id.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// A starting point offered when creating a project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub category: &'static str,
}

/// Publication state of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

/// A website listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Name of the template the project started from.
    pub template: String,
    /// `YYYY-MM-DD` of the last edit.
    pub last_edited: String,
    pub status: ProjectStatus,
    /// Public address; only published projects have one.
    pub url: Option<String>,
}

impl Project {
    /// Address to open for "Visit", if the project is live.
    #[must_use]
    pub fn visit_url(&self) -> Option<&str> {
        match self.status {
            ProjectStatus::Published => self.url.as_deref(),
            ProjectStatus::Draft => None,
        }
    }
}

pub const UNTITLED_PROJECT: &str = "Untitled Project";

const TEMPLATES: [Template; 3] = [
    Template {
        id: "template-1",
        name: "Business Portfolio",
        description: "Professional template for businesses and entrepreneurs",
        thumbnail: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        category: "Business",
    },
    Template {
        id: "template-2",
        name: "Creative Blog",
        description: "Modern blog template for creators and writers",
        thumbnail: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        category: "Blog",
    },
    Template {
        id: "template-3",
        name: "E-commerce Store",
        description: "Complete template for online stores",
        thumbnail: "https://images.pexels.com/photos/264547/pexels-photo-264547.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        category: "E-commerce",
    },
];

/// The template catalog, in display order.
#[must_use]
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Dashboard state: the project list and whether the template picker is open.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub show_templates: bool,
}

impl ProjectsState {
    /// The list a new session starts with.
    #[must_use]
    pub fn seeded() -> Self {
        let projects = vec![
            Project {
                id: "project-1".to_owned(),
                name: "My Portfolio".to_owned(),
                template: "Business Portfolio".to_owned(),
                last_edited: "2024-03-15".to_owned(),
                status: ProjectStatus::Published,
                url: Some("https://myportfolio.com".to_owned()),
            },
            Project {
                id: "project-2".to_owned(),
                name: "Tech Blog".to_owned(),
                template: "Creative Blog".to_owned(),
                last_edited: "2024-03-14".to_owned(),
                status: ProjectStatus::Draft,
                url: None,
            },
        ];
        Self { projects, show_templates: false }
    }

    /// Append an untitled draft based on `template_id` and close the picker.
    ///
    /// Returns `None` for an id outside the catalog.
    pub fn create_from_template(&mut self, template_id: &str, today: &str) -> Option<Project> {
        let template = templates().iter().find(|t| t.id == template_id)?;
        let project = Project {
            id: format!("project-{}", uuid::Uuid::new_v4().simple()),
            name: UNTITLED_PROJECT.to_owned(),
            template: template.name.to_owned(),
            last_edited: today.to_owned(),
            status: ProjectStatus::Draft,
            url: None,
        };
        self.projects.push(project.clone());
        self.show_templates = false;
        Some(project)
    }

    /// Remove a project. Returns `false` if no project has that id.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
