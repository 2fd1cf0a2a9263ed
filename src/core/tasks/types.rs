use crate::core::{
    HadithError,
    Session,
};

#[derive(Debug)]
pub enum TaskResult {
    Generated(Result<Session, HadithError>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Generated(_) => "generate",
        }
    }
}
