use serde::{Deserialize, Serialize};

pub type CourseId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
    pub languages: Vec<String>,
    pub duration: String,
    pub is_offline_available: bool,
    pub instructor: String,
    pub enrolled_count: u64,
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: u32,
    pub title: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Video,
    Text,
    Quiz,
    Interactive,
}

impl CourseModule {
    /// Absent completion counts as not completed.
    pub fn completed(&self) -> bool {
        self.is_completed.unwrap_or(false)
    }
}

impl Course {
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn completed_modules(&self) -> usize {
        self.modules.iter().filter(|m| m.completed()).count()
    }

    /// Whole-number completion percentage, rounded down. A course without
    /// modules reports 0.
    pub fn progress_percent(&self) -> u8 {
        let total = self.module_count();
        if total == 0 {
            return 0;
        }
        let percent = self.completed_modules() * 100 / total;
        u8::try_from(percent).unwrap_or(100)
    }

    pub fn speaks_any<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted
            .into_iter()
            .any(|lang| self.languages.iter().any(|l| l == lang))
    }
}
