pub mod command_loop;
pub mod inspect_config;
