//! Repository implementations, one per entity.

pub mod anniversary;
pub mod anniversary_type;
pub mod family;
pub mod person;
pub mod relation;
pub mod relation_type;
pub mod role;
pub mod user;

pub use anniversary::AnniversaryRepository;
pub use anniversary_type::AnniversaryTypeRepository;
pub use family::FamilyRepository;
pub use person::PersonRepository;
pub use relation::RelationRepository;
pub use relation_type::RelationTypeRepository;
pub use role::RoleRepository;
pub use user::UserRepository;
