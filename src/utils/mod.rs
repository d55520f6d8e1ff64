/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing the title sanitizer
pub mod title;

pub use logger::*;
pub use title::*;
