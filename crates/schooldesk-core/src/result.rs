use crate::error::SchoolDeskError;

pub type SchoolDeskResult<T> = Result<T, SchoolDeskError>;
