mod feedback;
mod feedback_enums;
mod feedback_sort;
mod repo_stat;
