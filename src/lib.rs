pub mod corpus;
pub mod driver;
pub mod gloss_index;
pub mod morpheme;
pub mod utility;
