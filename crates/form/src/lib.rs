pub(crate) mod errors;
pub(crate) mod store;
pub(crate) mod validate;
pub(crate) mod values;

pub use errors::FormError;
pub use store::FormStore;
pub use validate::{ValidationErrors, validate};
pub use values::{
    AdditionalSkills, ApplicationValues, Field, Position, PositionDetails, Skill,
};
