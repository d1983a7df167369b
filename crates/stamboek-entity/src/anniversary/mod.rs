//! Anniversary (jubileum) entity and its type vocabulary.

pub mod model;

pub use model::{
    Anniversary, AnniversaryDetail, AnniversaryType, CreateAnniversary, UpdateAnniversary,
};
