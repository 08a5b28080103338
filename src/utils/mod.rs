pub mod display_env;

pub use display_env::check_display_environment;
