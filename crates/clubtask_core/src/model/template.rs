//! Built-in task templates for the assignment form.

use crate::model::task::Priority;

/// Canned task content offered by the assignment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub task_name: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

const BUILTIN_TEMPLATES: &[TaskTemplate] = &[
    TaskTemplate {
        id: "event-planning",
        task_name: "Event Planning",
        description: "Plan the venue, schedule and volunteers for the upcoming club event.",
        priority: Priority::High,
    },
    TaskTemplate {
        id: "social-media-post",
        task_name: "Social Media Post",
        description: "Draft and schedule a post announcing the latest club update.",
        priority: Priority::Medium,
    },
    TaskTemplate {
        id: "tech-workshop",
        task_name: "Technical Workshop",
        description: "Prepare slides, demo code and a setup guide for the workshop.",
        priority: Priority::High,
    },
    TaskTemplate {
        id: "design-review",
        task_name: "Design Review",
        description: "Review posters and banners before they go to print.",
        priority: Priority::Medium,
    },
    TaskTemplate {
        id: "meeting-notes",
        task_name: "Weekly Meeting Notes",
        description: "Record decisions and action items from the weekly meeting.",
        priority: Priority::Low,
    },
];

pub fn builtin_templates() -> &'static [TaskTemplate] {
    BUILTIN_TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static TaskTemplate> {
    BUILTIN_TEMPLATES.iter().find(|template| template.id == id)
}
