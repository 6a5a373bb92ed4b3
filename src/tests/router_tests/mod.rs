mod auth_tests;
mod export_tests;
mod manager_tests;
mod public_tests;
