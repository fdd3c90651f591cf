mod config;
mod readings;
mod session;
