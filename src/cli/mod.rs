//! Interactive command-line front end
//!
//! This module contains the menu loop and the prompting helpers it uses,
//! bridging terminal input with the service layer.

pub mod menu;
pub mod prompt;

pub use menu::{run_menu, MenuChoice};
pub use prompt::{prompt_string, prompt_until};
