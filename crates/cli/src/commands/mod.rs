mod bump;

pub use bump::RunStatus;
pub use bump::read_config;
pub use bump::run;
