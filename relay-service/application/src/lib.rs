pub mod dto;
pub mod error;
pub mod normalize;
pub mod usecase;

pub use dto::*;
pub use error::{
    ApplicationError, MISSING_FILE_NAME_MESSAGE, NO_FILE_MESSAGE, TRANSPORT_MESSAGE,
    UNEXPECTED_SHAPE_MESSAGE,
};
pub use normalize::{normalize_backend_response, MatchedShape, ResponseShape, RESPONSE_SHAPES};
pub use usecase::*;
