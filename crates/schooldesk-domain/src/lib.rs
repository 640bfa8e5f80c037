pub mod class;
pub mod country_code;
pub mod distinction;
pub mod division;
pub mod entity_kind;
pub mod parent;
pub mod records;
pub mod role;
pub mod school;
pub mod search;
pub mod status;
pub mod student;
pub mod teacher;

pub use class::Class;
pub use country_code::CountryCode;
pub use distinction::Distinction;
pub use division::Division;
pub use entity_kind::EntityKind;
pub use parent::Parent;
pub use records::parse_records;
pub use role::Role;
pub use school::School;
pub use search::{filter_records, SearchQuery, Searchable};
pub use status::Status;
pub use student::Student;
pub use teacher::Teacher;
