mod auth_tests;
mod client_tests;
