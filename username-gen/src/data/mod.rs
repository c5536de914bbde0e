pub mod descriptive;
pub mod subject;
