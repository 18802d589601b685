mod relay;

pub use relay::{RelayUseCase, RelayUseCaseImpl};
