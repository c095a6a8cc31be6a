pub mod common;

mod endpoints;
